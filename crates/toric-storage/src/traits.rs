//! The [`ScopeStore`] trait defining the storage contract.
//!
//! Two families of operations:
//! - **Mode texts**: the registry is one document, read and written whole.
//!   Read-modify-write of a single key is the caller's concern.
//! - **Polytopes**: put / get / list / delete keyed by display name, with
//!   the sanitized form of the name as the storage identity.
//!
//! All backends (FileStore, InMemoryStore) implement this trait, ensuring
//! they are fully swappable without changing the API layer. The trait is
//! synchronous (not async) -- every operation touches at most one file.

use toric_core::{LatticeType, ModeTexts, Point, Polytope, PolytopeSummary};

use crate::error::StorageError;

/// The storage contract for mode texts and polytope records.
pub trait ScopeStore {
    // -------------------------------------------------------------------
    // Mode texts
    // -------------------------------------------------------------------

    /// Reads the mode-text registry.
    ///
    /// Tolerant: a missing or malformed document yields the empty registry
    /// rather than an error.
    fn load_texts(&self) -> Result<ModeTexts, StorageError>;

    /// Overwrites the mode-text registry as a whole document.
    fn save_texts(&mut self, texts: &ModeTexts) -> Result<(), StorageError>;

    // -------------------------------------------------------------------
    // Polytopes
    // -------------------------------------------------------------------

    /// Saves (upserts) a polytope, returning the stored record.
    ///
    /// Timestamps are assigned here: `updated_at` is always "now", while
    /// `created_at` is preserved from the prior record when the storage
    /// slot already holds one. Distinct names whose sanitized forms are
    /// equal share a slot; the later save wins.
    fn put_polytope(
        &mut self,
        name: &str,
        lattice_type: LatticeType,
        points: Vec<Point>,
    ) -> Result<Polytope, StorageError>;

    /// Loads the polytope stored under `name`'s sanitized form.
    ///
    /// Returns `Ok(None)` when no record exists. A record that exists but
    /// fails to decode is an error, not `None`.
    fn get_polytope(&self, name: &str) -> Result<Option<Polytope>, StorageError>;

    /// Lists summaries of every stored polytope, sorted by name.
    ///
    /// Entries that fail to parse are skipped and reported via
    /// `tracing::warn!` rather than aborting the listing.
    fn list_polytopes(&self) -> Result<Vec<PolytopeSummary>, StorageError>;

    /// Deletes the polytope stored under `name`'s sanitized form.
    ///
    /// Returns whether a record existed to delete.
    fn delete_polytope(&mut self, name: &str) -> Result<bool, StorageError>;
}
