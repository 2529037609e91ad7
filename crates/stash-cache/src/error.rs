//! Cache error types.

use thiserror::Error;

/// Errors from reading or writing storage slots.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing directory could not be opened or created.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// A slot could not be replaced.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Filesystem failure in a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters that cannot name a storage slot.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}
