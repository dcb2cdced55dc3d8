use roamly_shared::StoreSignal;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing storage in this runtime; callers fall back to read-only.
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage payload is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value port backing the local stores.
///
/// Mirrors browser `localStorage`: string keys, string values, whole-value
/// overwrite.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Broadcast port for payload-free store change signals.
pub trait SignalBus: Send + Sync {
    fn emit(&self, signal: StoreSignal);
}
