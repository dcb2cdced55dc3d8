pub mod checkout;
pub mod manager;
pub mod reports;

pub use checkout::{
    CheckoutDraft, CheckoutError, CheckoutOrchestrator, CheckoutOutcome, CheckoutReceipt,
    SimulatedGateway, PENDING_CHECKOUT_KEY,
};
pub use manager::{BookingManager, ManagerError};
pub use reports::{BookingCounts, DestinationCount, OperationsReport, ReportBuilder};
