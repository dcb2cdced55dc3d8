use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload-free change cue emitted by a store after every write.
///
/// Subscribers re-read the store when they receive it; the signal itself
/// carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreSignal {
    AdminNotificationsUpdated,
    TravelerNotificationsUpdated,
    BookingRequestsUpdated,
    PaymentHistoryUpdated,
    ToursUpdated,
    ContactMessagesUpdated,
}

impl StoreSignal {
    pub const ALL: [StoreSignal; 6] = [
        StoreSignal::AdminNotificationsUpdated,
        StoreSignal::TravelerNotificationsUpdated,
        StoreSignal::BookingRequestsUpdated,
        StoreSignal::PaymentHistoryUpdated,
        StoreSignal::ToursUpdated,
        StoreSignal::ContactMessagesUpdated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreSignal::AdminNotificationsUpdated => "admin-notifications-updated",
            StoreSignal::TravelerNotificationsUpdated => "traveler-notifications-updated",
            StoreSignal::BookingRequestsUpdated => "booking-requests-updated",
            StoreSignal::PaymentHistoryUpdated => "payment-history-updated",
            StoreSignal::ToursUpdated => "tours-updated",
            StoreSignal::ContactMessagesUpdated => "contact-messages-updated",
        }
    }
}

impl fmt::Display for StoreSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
