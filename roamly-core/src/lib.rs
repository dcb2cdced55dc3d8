pub mod booking;
pub mod contact;
pub mod identity;
pub mod notification;
pub mod payment;
pub mod storage;

pub use booking::{BookingRequest, BookingStatus, NewBookingRequest, TravelerDetails, Transportation};
pub use contact::ContactMessage;
pub use identity::{Role, Session};
pub use notification::{
    AdminNotification, AdminNotificationKind, NewNotification, Notification, Severity,
    TravelerNotification, TravelerNotificationKind,
};
pub use payment::{
    ChargeRequest, GatewayError, NewPaymentRecord, PaymentGateway, PaymentMethod, PaymentRecord,
    PaymentStatus, CURRENCY,
};
pub use storage::{KeyValueStore, SignalBus, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Identity verification failed: {0}")]
    IdentityError(String),
}

/// Generate a record id of the form `PREFIX-<32 hex chars>`.
///
/// Random rather than time-derived, so two records created in the same
/// millisecond never collide.
pub fn new_record_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple()).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_unique() {
        let a = new_record_id("BK");
        let b = new_record_id("BK");
        assert_ne!(a, b);
        assert!(a.starts_with("BK-"));
        assert_eq!(a.len(), 3 + 32);
    }
}
