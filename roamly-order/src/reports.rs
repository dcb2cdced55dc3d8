use chrono::{DateTime, Utc};
use roamly_core::{BookingRequest, BookingStatus, PaymentMethod, PaymentRecord, PaymentStatus};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationCount {
    /// "Kyoto, Japan"
    pub location: String,
    pub bookings: usize,
}

/// Snapshot for the admin dashboard. Amounts are whole rupees.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationsReport {
    pub generated_at: DateTime<Utc>,
    pub bookings: BookingCounts,
    /// Travelers on requests that were not rejected
    pub travelers_booked: u64,
    pub gross_revenue: u64,
    pub refunded_total: u64,
    pub pending_amount: u64,
    pub revenue_by_method: HashMap<PaymentMethod, u64>,
    pub top_destinations: Vec<DestinationCount>,
}

/// Aggregates booking and payment collections into an [`OperationsReport`]
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    top_destinations: usize,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self { top_destinations: 5 }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_destinations(mut self, limit: usize) -> Self {
        self.top_destinations = limit;
        self
    }

    pub fn build(&self, bookings: &[BookingRequest], payments: &[PaymentRecord]) -> OperationsReport {
        let mut counts = BookingCounts::default();
        let mut travelers_booked: u64 = 0;
        let mut per_destination: HashMap<String, usize> = HashMap::new();

        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Approved => counts.approved += 1,
                BookingStatus::Rejected => counts.rejected += 1,
            }
            if booking.status != BookingStatus::Rejected {
                travelers_booked = travelers_booked.saturating_add(u64::from(booking.travelers_count.max(1)));
            }
            *per_destination
                .entry(format!("{}, {}", booking.destination, booking.country))
                .or_default() += 1;
        }

        // sums saturate at u64::MAX
        let mut gross_revenue: u64 = 0;
        let mut refunded_total: u64 = 0;
        let mut pending_amount: u64 = 0;
        let mut revenue_by_method: HashMap<PaymentMethod, u64> = HashMap::new();

        for payment in payments {
            match payment.status {
                _ if payment.is_settled() => {
                    gross_revenue = gross_revenue.saturating_add(payment.amount);
                    let by_method = revenue_by_method.entry(payment.method).or_default();
                    *by_method = by_method.saturating_add(payment.amount);
                }
                PaymentStatus::Refunded => refunded_total = refunded_total.saturating_add(payment.amount),
                PaymentStatus::Pending => pending_amount = pending_amount.saturating_add(payment.amount),
                _ => {}
            }
        }

        let mut top_destinations: Vec<DestinationCount> = per_destination
            .into_iter()
            .map(|(location, bookings)| DestinationCount { location, bookings })
            .collect();
        top_destinations.sort_by(|a, b| b.bookings.cmp(&a.bookings).then_with(|| a.location.cmp(&b.location)));
        top_destinations.truncate(self.top_destinations);

        OperationsReport {
            generated_at: Utc::now(),
            bookings: counts,
            travelers_booked,
            gross_revenue,
            refunded_total,
            pending_amount,
            revenue_by_method,
            top_destinations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roamly_core::Transportation;

    fn booking(destination: &str, country: &str, status: BookingStatus, travelers: u32) -> BookingRequest {
        BookingRequest {
            id: format!("BK-{}-{:?}", destination, status),
            traveler_name: "Asha".to_string(),
            traveler_email: "asha@example.com".to_string(),
            destination: destination.to_string(),
            country: country.to_string(),
            travel_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            transportation: Transportation::Suv,
            travelers_count: travelers,
            status,
            requested_at: Utc::now(),
            admin_note: String::new(),
        }
    }

    fn payment(method: PaymentMethod, amount: u64, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord {
            id: format!("PAY-{}", amount),
            booking_id: "BK-1".to_string(),
            traveler_name: "Asha".to_string(),
            traveler_email: "asha@example.com".to_string(),
            method,
            amount,
            currency: "INR".to_string(),
            status,
            paid_at: Utc::now(),
        }
    }

    #[test]
    fn test_aggregates() {
        let bookings = vec![
            booking("Kyoto", "Japan", BookingStatus::Pending, 2),
            booking("Kyoto", "Japan", BookingStatus::Approved, 3),
            booking("Bali", "Indonesia", BookingStatus::Rejected, 4),
        ];
        let payments = vec![
            payment(PaymentMethod::Card, 285_000, PaymentStatus::Success),
            payment(PaymentMethod::Upi, 100_000, PaymentStatus::Success),
            payment(PaymentMethod::Card, 50_000, PaymentStatus::Success),
            payment(PaymentMethod::Card, 142_500, PaymentStatus::Refunded),
            payment(PaymentMethod::BankTransfer, 396_000, PaymentStatus::Pending),
            payment(PaymentMethod::Upi, 1_000, PaymentStatus::Failed),
        ];

        let report = ReportBuilder::new().build(&bookings, &payments);
        assert_eq!(report.bookings, BookingCounts { pending: 1, approved: 1, rejected: 1 });
        assert_eq!(report.travelers_booked, 5);
        assert_eq!(report.gross_revenue, 435_000);
        assert_eq!(report.refunded_total, 142_500);
        assert_eq!(report.pending_amount, 396_000);
        assert_eq!(report.revenue_by_method.get(&PaymentMethod::Card), Some(&335_000));
        assert_eq!(report.revenue_by_method.get(&PaymentMethod::Upi), Some(&100_000));
        assert_eq!(report.revenue_by_method.get(&PaymentMethod::BankTransfer), None);
        assert_eq!(report.top_destinations[0], DestinationCount { location: "Kyoto, Japan".to_string(), bookings: 2 });
    }

    #[test]
    fn test_top_destinations_limited_and_tie_broken_by_name() {
        let bookings = vec![
            booking("Jaipur", "India", BookingStatus::Pending, 1),
            booking("Bali", "Indonesia", BookingStatus::Pending, 1),
            booking("Kyoto", "Japan", BookingStatus::Pending, 1),
        ];
        let report = ReportBuilder::new().with_top_destinations(2).build(&bookings, &[]);
        let locations: Vec<&str> = report.top_destinations.iter().map(|d| d.location.as_str()).collect();
        assert_eq!(locations, vec!["Bali, Indonesia", "Jaipur, India"]);
    }

    #[test]
    fn test_oversized_stored_amount_saturates() {
        let stored: PaymentRecord = serde_json::from_value(serde_json::json!({
            "id": "PAY-HUGE",
            "bookingId": "BK-HUGE",
            "travelerName": "X",
            "travelerEmail": "x@example.com",
            "method": "CARD",
            "amount": 1e20,
            "currency": "INR",
            "status": "SUCCESS",
            "paidAt": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(stored.amount, u64::MAX);

        let payments = vec![stored.clone(), payment(PaymentMethod::Card, 285_000, PaymentStatus::Success)];
        let report = ReportBuilder::new().build(&[], &payments);
        assert_eq!(report.gross_revenue, u64::MAX);
        assert_eq!(report.revenue_by_method.get(&PaymentMethod::Card), Some(&u64::MAX));

        let refunds = vec![
            PaymentRecord { status: PaymentStatus::Refunded, ..stored.clone() },
            PaymentRecord { status: PaymentStatus::Refunded, ..stored },
        ];
        assert_eq!(ReportBuilder::new().build(&[], &refunds).refunded_total, u64::MAX);
    }

    #[test]
    fn test_empty_inputs() {
        let report = ReportBuilder::default().build(&[], &[]);
        assert_eq!(report.bookings, BookingCounts::default());
        assert_eq!(report.gross_revenue, 0);
        assert!(report.top_destinations.is_empty());
    }
}
