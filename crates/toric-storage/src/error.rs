//! Storage error types for toric-storage.
//!
//! [`StorageError`] covers the two failure modes a flat-file backend can
//! hit: filesystem I/O and JSON (de)serialization. Absence is not an error;
//! trait methods model it with `Option` / `bool` returns.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read, write, or delete failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
