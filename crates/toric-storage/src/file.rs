//! Flat-file implementation of [`ScopeStore`].
//!
//! [`FileStore`] keeps behavioral parity with the original service: the
//! mode-text registry is one JSON document (`mode_texts.json`), and each
//! polytope is one JSON file under `polytopes/`, named by the sanitized
//! form of its display name. Both directories are created once at
//! construction.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use toric_core::{sanitize_name, LatticeType, ModeTexts, Point, Polytope, PolytopeSummary};

use crate::clock::now_iso;
use crate::error::StorageError;
use crate::traits::ScopeStore;

const TEXTS_FILENAME: &str = "mode_texts.json";
const POLYTOPES_DIRNAME: &str = "polytopes";

/// Storage backend writing JSON files under a data directory.
#[derive(Debug)]
pub struct FileStore {
    texts_path: PathBuf,
    polytopes_dir: PathBuf,
}

impl FileStore {
    /// Opens a file store rooted at `data_dir`, creating the directory
    /// layout if absent. Idempotent.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref();
        let polytopes_dir = data_dir.join(POLYTOPES_DIRNAME);
        fs::create_dir_all(&polytopes_dir)?;
        Ok(FileStore {
            texts_path: data_dir.join(TEXTS_FILENAME),
            polytopes_dir,
        })
    }

    /// The file path a polytope name resolves to.
    fn polytope_path(&self, name: &str) -> PathBuf {
        self.polytopes_dir
            .join(format!("{}.json", sanitize_name(name)))
    }

    /// Reads and parses the record at `path`, if both succeed.
    fn read_record(path: &Path) -> Result<Polytope, StorageError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl ScopeStore for FileStore {
    fn load_texts(&self) -> Result<ModeTexts, StorageError> {
        let raw = match fs::read_to_string(&self.texts_path) {
            Ok(raw) => raw,
            // Lazily created on first write; absent means empty.
            Err(_) => return Ok(ModeTexts::new()),
        };
        let entries: BTreeMap<String, String> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %self.texts_path.display(),
                    error = %err,
                    "mode-text document is malformed; treating as empty"
                );
                return Ok(ModeTexts::new());
            }
        };
        let mut texts = ModeTexts::new();
        for (key, content) in entries {
            if let Ok(mode) = key.parse() {
                texts.set(mode, content);
            }
        }
        Ok(texts)
    }

    fn save_texts(&mut self, texts: &ModeTexts) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(texts)?;
        fs::write(&self.texts_path, raw)?;
        Ok(())
    }

    fn put_polytope(
        &mut self,
        name: &str,
        lattice_type: LatticeType,
        points: Vec<Point>,
    ) -> Result<Polytope, StorageError> {
        let path = self.polytope_path(name);
        let previous = if path.exists() {
            Self::read_record(&path).ok()
        } else {
            None
        };

        if let Some(prior) = previous.as_ref() {
            if prior.name != name {
                tracing::warn!(
                    incoming = name,
                    stored = %prior.name,
                    path = %path.display(),
                    "sanitized name collision; overwriting stored record"
                );
            }
        }

        let now = now_iso();
        let created_at = previous
            .map(|prior| prior.created_at)
            .filter(|stamp| !stamp.is_empty())
            .unwrap_or_else(|| now.clone());
        let polytope = Polytope {
            name: name.to_string(),
            lattice_type,
            points,
            created_at,
            updated_at: now,
        };

        let raw = serde_json::to_string_pretty(&polytope)?;
        fs::write(&path, raw)?;
        Ok(polytope)
    }

    fn get_polytope(&self, name: &str) -> Result<Option<Polytope>, StorageError> {
        let path = self.polytope_path(name);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).map(Some)
    }

    fn list_polytopes(&self) -> Result<Vec<PolytopeSummary>, StorageError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.polytopes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read_record(&path) {
                Ok(polytope) => summaries.push(PolytopeSummary::of(&polytope)),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping unreadable polytope file during listing"
                    );
                }
            }
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }

    fn delete_polytope(&mut self, name: &str) -> Result<bool, StorageError> {
        let path = self.polytope_path(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;
    use toric_core::Mode;

    fn store() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn new_is_idempotent() {
        let dir = TempDir::new().unwrap();
        FileStore::new(dir.path()).unwrap();
        FileStore::new(dir.path()).unwrap();
    }

    #[test]
    fn texts_absent_file_reads_empty() {
        let (_dir, store) = store();
        let texts = store.load_texts().unwrap();
        for mode in Mode::ALL {
            assert_eq!(texts.get(mode), "");
        }
    }

    #[test]
    fn texts_save_then_load_roundtrip() {
        let (_dir, mut store) = store();
        let mut texts = ModeTexts::new();
        texts.set(Mode::Multiplicities, "BKN data".to_string());
        store.save_texts(&texts).unwrap();

        let loaded = store.load_texts().unwrap();
        assert_eq!(loaded.get(Mode::Multiplicities), "BKN data");
        assert_eq!(loaded.get(Mode::Rings), "");
    }

    #[test]
    fn texts_malformed_document_reads_empty() {
        let (dir, store) = store();
        fs::write(dir.path().join(TEXTS_FILENAME), "not json {").unwrap();
        let texts = store.load_texts().unwrap();
        assert_eq!(texts, ModeTexts::new());
    }

    #[test]
    fn texts_unknown_keys_are_ignored() {
        let (dir, store) = store();
        fs::write(
            dir.path().join(TEXTS_FILENAME),
            r#"{ "fans": "kept", "cones": "dropped" }"#,
        )
        .unwrap();
        let texts = store.load_texts().unwrap();
        assert_eq!(texts.get(Mode::Fans), "kept");
    }

    #[test]
    fn put_then_get_roundtrip() {
        let (_dir, mut store) = store();
        let saved = store
            .put_polytope("Square A", LatticeType::Square, vec![[0, 0], [1, 0], [1, 1], [0, 1]])
            .unwrap();
        assert!(!saved.created_at.is_empty());
        assert!(!saved.updated_at.is_empty());

        let loaded = store.get_polytope("Square A").unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.points, vec![[0, 0], [1, 0], [1, 1], [0, 1]]);
    }

    #[test]
    fn get_missing_returns_none() {
        let (_dir, store) = store();
        assert!(store.get_polytope("nope").unwrap().is_none());
    }

    #[test]
    fn get_corrupt_record_is_an_error() {
        let (dir, store) = store();
        fs::write(dir.path().join("polytopes/Bad.json"), "{ truncated").unwrap();
        assert!(store.get_polytope("Bad").is_err());
    }

    #[test]
    fn resave_preserves_created_at() {
        let (_dir, mut store) = store();
        let first = store
            .put_polytope("P", LatticeType::Square, vec![[0, 0]])
            .unwrap();
        let second = store
            .put_polytope("P", LatticeType::Hexagonal, vec![[1, 1], [2, 2]])
            .unwrap();
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.lattice_type, LatticeType::Hexagonal);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn sanitized_collision_is_last_write_wins() {
        let (dir, mut store) = store();
        store
            .put_polytope("Square A", LatticeType::Square, vec![[0, 0]])
            .unwrap();
        store
            .put_polytope("Square_A", LatticeType::Hexagonal, vec![[5, 5]])
            .unwrap();

        let files: Vec<_> = fs::read_dir(dir.path().join(POLYTOPES_DIRNAME))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("Square_A.json")]);

        let stored = store.get_polytope("Square A").unwrap().unwrap();
        assert_eq!(stored.name, "Square_A");
        assert_eq!(stored.points, vec![[5, 5]]);
    }

    #[test]
    fn list_sorts_by_name_and_skips_corrupt_files() {
        let (dir, mut store) = store();
        store
            .put_polytope("B", LatticeType::Square, vec![[0, 0]])
            .unwrap();
        store
            .put_polytope("A", LatticeType::Hexagonal, vec![[1, 1], [2, 2]])
            .unwrap();
        fs::write(dir.path().join("polytopes/corrupt.json"), "not json").unwrap();
        // Mandatory name field missing: also skipped.
        fs::write(
            dir.path().join("polytopes/anonymous.json"),
            r#"{ "points": [[0, 0]] }"#,
        )
        .unwrap();

        let summaries = store.list_polytopes().unwrap();
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(summaries[0].point_count, 2);
    }

    #[test]
    fn delete_reports_existence() {
        let (_dir, mut store) = store();
        assert!(!store.delete_polytope("ghost").unwrap());

        store
            .put_polytope("ghost", LatticeType::Square, vec![])
            .unwrap();
        assert!(store.delete_polytope("ghost").unwrap());
        assert!(!store.delete_polytope("ghost").unwrap());
        assert!(store.get_polytope("ghost").unwrap().is_none());
    }
}
