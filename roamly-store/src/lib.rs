pub mod app_config;
pub mod backend;
pub mod bookings;
pub mod contacts;
pub mod events;
pub mod local;
pub mod notifications;
pub mod payments;
pub mod seeds;
pub mod tours;

pub use backend::{FileStorage, MemoryStorage, UnavailableStorage};
pub use bookings::{BookingRequestStore, BookingRequests};
pub use contacts::{ContactMessageStore, ContactMessages};
pub use events::{InProcessBus, SubscriptionId};
pub use local::{Collection, LocalStore, SchemaVersion};
pub use notifications::{
    AdminNotificationStore, AdminScope, NotificationScope, Notifications, TravelerNotificationStore,
    TravelerScope,
};
pub use payments::{PaymentHistory, PaymentHistoryStore};
pub use tours::{TourCatalog, TourCatalogStore};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] roamly_core::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    Validation(#[from] roamly_catalog::ValidationError),
}

pub type StoreResult<T> = Result<T, StoreError>;
