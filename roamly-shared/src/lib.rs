pub mod hash;
pub mod pii;
pub mod signals;

pub use hash::stable_hash;
pub use pii::Masked;
pub use signals::StoreSignal;
