use roamly_core::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage backend failed to open: {0}")]
    Storage(#[from] StorageError),
}
