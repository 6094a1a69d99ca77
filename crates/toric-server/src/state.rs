//! Application state with the injected storage backend.
//!
//! [`AppState`] wraps a `ScopeStore` backend in `Arc<tokio::sync::Mutex<>>`
//! for use with axum handlers. Uses `tokio::sync::Mutex` (async-aware)
//! instead of `std::sync::Mutex` (blocking) so handlers await the lock
//! without blocking the tokio runtime. Each request performs its file I/O
//! synchronously under the lock; there is no caching between requests.

use std::path::Path;
use std::sync::Arc;

use toric_storage::{FileStore, InMemoryStore, ScopeStore};

use crate::error::ApiError;

/// Shared application state for the HTTP server.
///
/// The storage backend is injected at construction, so the API layer never
/// touches file paths directly and backends swap freely.
#[derive(Clone)]
pub struct AppState {
    /// The shared storage backend (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<Box<dyn ScopeStore + Send>>>,
}

impl AppState {
    /// Creates an `AppState` backed by JSON files under `data_dir`.
    ///
    /// The directory layout is created if absent (idempotent process
    /// setup, not a per-request concern).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let store = FileStore::new(data_dir)?;
        Ok(Self::with_store(Box::new(store)))
    }

    /// Creates an `AppState` backed by process memory (for testing).
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(InMemoryStore::new()))
    }

    /// Creates an `AppState` around an explicit backend.
    pub fn with_store(store: Box<dyn ScopeStore + Send>) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}
