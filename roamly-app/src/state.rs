use roamly_catalog::{PricingEngine, WeatherGenerator};
use roamly_core::KeyValueStore;
use roamly_order::{BookingManager, CheckoutOrchestrator, SimulatedGateway};
use roamly_shared::StoreSignal;
use roamly_store::app_config::{Config, StorageBackend};
use roamly_store::{
    AdminNotificationStore, BookingRequestStore, ContactMessageStore, FileStorage, InProcessBus,
    MemoryStorage, PaymentHistoryStore, TourCatalogStore, TravelerNotificationStore,
    UnavailableStorage,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::AppError;

/// Every store and service, wired once over a shared storage port and bus
#[derive(Clone)]
pub struct AppState {
    pub bus: Arc<InProcessBus>,
    pub tours: TourCatalogStore,
    pub bookings: BookingRequestStore,
    pub payments: PaymentHistoryStore,
    pub admin_notifications: AdminNotificationStore,
    pub traveler_notifications: TravelerNotificationStore,
    pub contacts: ContactMessageStore,
    pub pricing: PricingEngine,
    pub weather: WeatherGenerator,
    pub checkout: Arc<CheckoutOrchestrator>,
    pub manager: Arc<BookingManager>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let storage: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::File => Arc::new(FileStorage::open(&config.storage.path)?),
            StorageBackend::Unavailable => Arc::new(UnavailableStorage),
        };
        info!("Using {:?} storage", config.storage.backend);
        Ok(Self::new(storage, PricingEngine::new(config.pricing.clone())))
    }

    /// Session-scoped data lives in memory for the life of the process.
    pub fn new(storage: Arc<dyn KeyValueStore>, pricing: PricingEngine) -> Self {
        let bus = Arc::new(InProcessBus::new());
        for signal in StoreSignal::ALL {
            bus.subscribe(signal, |signal| debug!("Store signal: {}", signal));
        }

        let bookings = BookingRequestStore::new(storage.clone(), bus.clone());
        let payments = PaymentHistoryStore::new(storage.clone(), bus.clone());
        let admin_notifications = AdminNotificationStore::new(storage.clone(), bus.clone());
        let traveler_notifications = TravelerNotificationStore::new(storage.clone(), bus.clone());

        let checkout = CheckoutOrchestrator::new(
            bookings.clone(),
            payments.clone(),
            admin_notifications.clone(),
            traveler_notifications.clone(),
            Arc::new(SimulatedGateway),
            Arc::new(MemoryStorage::new()),
        );
        let manager = BookingManager::new(bookings.clone(), traveler_notifications.clone());

        Self {
            tours: TourCatalogStore::new(storage.clone(), bus.clone()),
            contacts: ContactMessageStore::new(storage, bus.clone()),
            weather: WeatherGenerator::default(),
            checkout: Arc::new(checkout),
            manager: Arc::new(manager),
            bus,
            bookings,
            payments,
            admin_notifications,
            traveler_notifications,
            pricing,
        }
    }
}
