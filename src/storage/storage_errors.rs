use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Custom error type for the durable store boundary. Failures surface to the
/// caller as-is; the engine never retries on its own.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unsupported schema version {found} (this build expects {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },
}
