//! In-memory implementation of [`ScopeStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral use.
//! It keys polytopes by the sanitized form of their names, giving it the
//! same collision semantics as the file backend: distinct display names
//! with equal sanitized forms share one slot, last write wins.

use std::collections::BTreeMap;

use toric_core::{sanitize_name, LatticeType, ModeTexts, Point, Polytope, PolytopeSummary};

use crate::clock::now_iso;
use crate::error::StorageError;
use crate::traits::ScopeStore;

/// Storage backend holding everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    texts: ModeTexts,
    /// Polytopes keyed by sanitized name.
    polytopes: BTreeMap<String, Polytope>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }
}

impl ScopeStore for InMemoryStore {
    fn load_texts(&self) -> Result<ModeTexts, StorageError> {
        Ok(self.texts.clone())
    }

    fn save_texts(&mut self, texts: &ModeTexts) -> Result<(), StorageError> {
        self.texts = texts.clone();
        Ok(())
    }

    fn put_polytope(
        &mut self,
        name: &str,
        lattice_type: LatticeType,
        points: Vec<Point>,
    ) -> Result<Polytope, StorageError> {
        let key = sanitize_name(name);
        let previous = self.polytopes.get(&key);

        if let Some(prior) = previous {
            if prior.name != name {
                tracing::warn!(
                    incoming = name,
                    stored = %prior.name,
                    "sanitized name collision; overwriting stored record"
                );
            }
        }

        let now = now_iso();
        let created_at = previous
            .map(|prior| prior.created_at.clone())
            .filter(|stamp| !stamp.is_empty())
            .unwrap_or_else(|| now.clone());
        let polytope = Polytope {
            name: name.to_string(),
            lattice_type,
            points,
            created_at,
            updated_at: now,
        };

        self.polytopes.insert(key, polytope.clone());
        Ok(polytope)
    }

    fn get_polytope(&self, name: &str) -> Result<Option<Polytope>, StorageError> {
        Ok(self.polytopes.get(&sanitize_name(name)).cloned())
    }

    fn list_polytopes(&self) -> Result<Vec<PolytopeSummary>, StorageError> {
        let mut summaries: Vec<_> = self.polytopes.values().map(PolytopeSummary::of).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    fn delete_polytope(&mut self, name: &str) -> Result<bool, StorageError> {
        Ok(self.polytopes.remove(&sanitize_name(name)).is_some())
    }
}
