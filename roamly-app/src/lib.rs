pub mod error;
pub mod state;
pub mod summary;

pub use error::AppError;
pub use state::AppState;
