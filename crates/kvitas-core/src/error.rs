//! Error types for the kvitas-core library.

use thiserror::Error;

/// Main error type for the kvitas library.
///
/// Note that extraction itself has no error type: the parser always produces
/// a result, and a missing amount is reported through the result's
/// `succeeded` flag. Errors exist only at the storage and configuration
/// seams.
#[derive(Error, Debug)]
pub enum KvitasError {
    /// Expense store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by expense store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize a record for storage.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying storage I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the kvitas library.
pub type Result<T> = std::result::Result<T, KvitasError>;
