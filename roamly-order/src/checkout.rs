use roamly_catalog::{PricingEngine, Tour};
use roamly_core::{
    AdminNotificationKind, BookingRequest, ChargeRequest, GatewayError, KeyValueStore,
    NewBookingRequest, NewNotification, NewPaymentRecord, PaymentGateway, PaymentMethod,
    PaymentRecord, PaymentStatus, Session, Severity, StorageError, TravelerNotificationKind,
    CURRENCY,
};
use roamly_shared::Masked;
use roamly_store::{
    AdminNotificationStore, BookingRequestStore, PaymentHistoryStore, StoreError,
    TravelerNotificationStore,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Session-storage key holding a draft staged before login
pub const PENDING_CHECKOUT_KEY: &str = "roamly_pending_checkout";

/// Everything the booking form hands to checkout.
///
/// `price_per_traveler` comes from the pricing engine upstream and is
/// trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDraft {
    #[serde(flatten)]
    pub booking: NewBookingRequest,
    #[serde(default)]
    pub method: PaymentMethod,
    pub price_per_traveler: u64,
}

impl CheckoutDraft {
    /// Draft priced from the tour's current quote
    pub fn for_tour(tour: &Tour, pricing: &PricingEngine, booking: NewBookingRequest, method: PaymentMethod) -> Self {
        Self {
            booking,
            method,
            price_per_traveler: u64::from(pricing.price_for(tour)),
        }
    }

    /// `max(1, travelers) * price_per_traveler`, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        u64::from(self.booking.travelers_count()).saturating_mul(self.price_per_traveler)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub booking_request: BookingRequest,
    pub payment_record: PaymentRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Completed(CheckoutReceipt),
    /// No traveler session; nothing was written
    LoginRequired,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Payment failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Session storage error: {0}")]
    SessionStorage(#[from] StorageError),

    #[error("No checkout is staged")]
    NothingStaged,
}

/// Demo gateway that settles every charge immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedGateway;

impl PaymentGateway for SimulatedGateway {
    fn charge(&self, request: &ChargeRequest) -> Result<PaymentStatus, GatewayError> {
        debug!(
            "Simulated charge of {} {} for booking {}",
            request.currency, request.amount, request.booking_id
        );
        Ok(PaymentStatus::Success)
    }
}

/// Turns a booking draft into a booking request plus its payment record
pub struct CheckoutOrchestrator {
    bookings: BookingRequestStore,
    payments: PaymentHistoryStore,
    admin_notifications: AdminNotificationStore,
    traveler_notifications: TravelerNotificationStore,
    gateway: Arc<dyn PaymentGateway>,
    session_storage: Arc<dyn KeyValueStore>,
}

impl CheckoutOrchestrator {
    pub fn new(
        bookings: BookingRequestStore,
        payments: PaymentHistoryStore,
        admin_notifications: AdminNotificationStore,
        traveler_notifications: TravelerNotificationStore,
        gateway: Arc<dyn PaymentGateway>,
        session_storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            bookings,
            payments,
            admin_notifications,
            traveler_notifications,
            gateway,
            session_storage,
        }
    }

    /// Keep a draft across the login redirect
    pub fn stage(&self, draft: &CheckoutDraft) -> Result<(), CheckoutError> {
        let payload = serde_json::to_string(draft).map_err(StorageError::from)?;
        self.session_storage.set(PENDING_CHECKOUT_KEY, &payload)?;
        debug!("Staged checkout for {}", draft.booking.destination);
        Ok(())
    }

    /// The staged draft, if one exists and still parses
    pub fn staged(&self) -> Option<CheckoutDraft> {
        let raw = match self.session_storage.get(PENDING_CHECKOUT_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read staged checkout: {}", e);
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| debug!("Discarding unreadable staged checkout: {}", e))
            .ok()
    }

    pub fn clear_staged(&self) -> Result<(), CheckoutError> {
        match self.session_storage.remove(PENDING_CHECKOUT_KEY) {
            Ok(()) | Err(StorageError::Unavailable) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check out the staged draft. It stays staged when login is required.
    pub fn checkout_staged(&self, session: Option<&Session>) -> Result<CheckoutOutcome, CheckoutError> {
        let draft = self.staged().ok_or(CheckoutError::NothingStaged)?;
        self.checkout(session, draft)
    }

    /// Create the PENDING booking request, charge the total and log the
    /// payment against the new booking.
    ///
    /// A failure after the booking is created leaves it without a payment.
    pub fn checkout(&self, session: Option<&Session>, draft: CheckoutDraft) -> Result<CheckoutOutcome, CheckoutError> {
        let Some(session) = session.filter(|s| s.is_traveler()) else {
            info!("Checkout for {} refused: traveler login required", draft.booking.destination);
            return Ok(CheckoutOutcome::LoginRequired);
        };

        let total = draft.total();
        let CheckoutDraft { mut booking, method, .. } = draft;
        if booking.traveler_name.trim().is_empty() {
            booking.traveler_name = session.name.clone();
        }
        if booking.traveler_email.trim().is_empty() {
            booking.traveler_email = session.email.expose().clone();
        }

        let booking_request = self.bookings.create(booking)?;

        let status = self.gateway.charge(&ChargeRequest {
            booking_id: booking_request.id.clone(),
            amount: total,
            currency: CURRENCY.to_string(),
            method,
        })?;

        let payment_record = self.payments.create(NewPaymentRecord {
            booking_id: booking_request.id.clone(),
            traveler_name: booking_request.traveler_name.clone(),
            traveler_email: booking_request.traveler_email.clone(),
            method,
            amount: total,
            status,
        })?;

        self.clear_staged()?;
        self.announce(&booking_request, &payment_record);

        info!(
            "Checkout complete for {}: booking {}, payment {} ({} {})",
            Masked::new(&booking_request.traveler_email),
            booking_request.id,
            payment_record.id,
            payment_record.currency,
            payment_record.amount
        );
        Ok(CheckoutOutcome::Completed(CheckoutReceipt {
            booking_request,
            payment_record,
        }))
    }

    // Records are already written; a lost notification is only logged.
    fn announce(&self, booking: &BookingRequest, payment: &PaymentRecord) {
        let admin = NewNotification::new(
            AdminNotificationKind::NewBooking,
            "New booking request",
            format!(
                "{} requested {}, {} for {} traveler(s).",
                booking.traveler_name, booking.destination, booking.country, booking.travelers_count
            ),
        )
        .with_severity(Severity::Info);
        if let Err(e) = self.admin_notifications.push(admin) {
            warn!("Failed to notify admins of booking {}: {}", booking.id, e);
        }

        let traveler = NewNotification::new(
            TravelerNotificationKind::Payment,
            "Payment received",
            format!(
                "{} {} received for your {}, {} trip.",
                payment.currency, payment.amount, booking.destination, booking.country
            ),
        )
        .with_severity(Severity::Success);
        if let Err(e) = self.traveler_notifications.push(traveler) {
            warn!("Failed to notify traveler of payment {}: {}", payment.id, e);
        }
    }
}
