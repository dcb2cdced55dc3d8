use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Every payment in this system is denominated in rupees.
pub const CURRENCY: &str = "INR";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Pending,
    Refunded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    BankTransfer,
}

/// A logged transaction associated with a booking.
///
/// `booking_id` is informational; it is never checked against the booking
/// store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub booking_id: String,
    pub traveler_name: String,
    pub traveler_email: String,
    #[serde(default)]
    pub method: PaymentMethod,
    /// Whole rupees
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
}

fn default_currency() -> String {
    CURRENCY.to_string()
}

/// Accept integers, floats and numeric strings; anything negative, non-finite
/// or unparsable becomes 0.
fn lenient_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

pub fn amount_from_value(value: &serde_json::Value) -> u64 {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

impl PaymentRecord {
    pub fn normalized(mut self) -> Self {
        self.currency = CURRENCY.to_string();
        self.traveler_email = self.traveler_email.trim().to_lowercase();
        self
    }

    pub fn is_settled(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

/// Fields needed to log a completed checkout
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentRecord {
    pub booking_id: String,
    pub traveler_name: String,
    pub traveler_email: String,
    pub method: PaymentMethod,
    pub amount: u64,
    pub status: PaymentStatus,
}

impl NewPaymentRecord {
    pub fn into_record(self, id: String, paid_at: DateTime<Utc>) -> PaymentRecord {
        PaymentRecord {
            id,
            booking_id: self.booking_id,
            traveler_name: self.traveler_name,
            traveler_email: self.traveler_email,
            method: self.method,
            amount: self.amount,
            currency: CURRENCY.to_string(),
            status: self.status,
            paid_at,
        }
        .normalized()
    }
}

/// A charge handed to the payment gateway
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeRequest {
    pub booking_id: String,
    pub amount: u64,
    pub currency: String,
    pub method: PaymentMethod,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment declined: {0}")]
    Declined(String),
    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Port to whatever settles a charge.
pub trait PaymentGateway: Send + Sync {
    /// Settle the charge and report its outcome
    fn charge(&self, request: &ChargeRequest) -> Result<PaymentStatus, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(amount: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "PAY-1",
            "bookingId": "BK-1",
            "travelerName": "Asha",
            "travelerEmail": "asha@example.com",
            "method": "UPI",
            "amount": amount,
            "currency": "USD",
            "status": "SUCCESS",
            "paidAt": "2026-02-01T09:30:00Z"
        })
    }

    #[test]
    fn test_amount_coercion() {
        let cases = [
            (json!(45000), 45000),
            (json!(45000.4), 45000),
            (json!("12500"), 12500),
            (json!(-20), 0),
            (json!("abc"), 0),
            (json!(null), 0),
        ];
        for (raw, expected) in cases {
            let record: PaymentRecord = serde_json::from_value(record_json(raw)).unwrap();
            assert_eq!(record.amount, expected);
        }
    }

    #[test]
    fn test_currency_forced_to_inr() {
        let record: PaymentRecord = serde_json::from_value(record_json(json!(100))).unwrap();
        assert_eq!(record.currency, "USD");
        assert_eq!(record.normalized().currency, CURRENCY);
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(
            serde_json::to_value(PaymentMethod::BankTransfer).unwrap(),
            json!("BANK_TRANSFER")
        );
        assert_eq!(serde_json::to_value(PaymentStatus::Refunded).unwrap(), json!("REFUNDED"));
    }
}
