//! The fixed set of free-text modes and their persisted registry.
//!
//! A [`Mode`] is one of four labels the frontend stores notes under. The
//! labels are unrelated to the polytope storage feature; they exist purely
//! as keys for free text. [`ModeTexts`] is the in-memory form of the
//! persisted registry: a mode-to-string mapping where absent keys read as
//! the empty string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four fixed free-text categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Polytopes,
    Multiplicities,
    Rings,
    Fans,
}

impl Mode {
    /// All modes, in registry order.
    pub const ALL: [Mode; 4] = [
        Mode::Polytopes,
        Mode::Multiplicities,
        Mode::Rings,
        Mode::Fans,
    ];

    /// The lowercase wire form of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Polytopes => "polytopes",
            Mode::Multiplicities => "multiplicities",
            Mode::Rings => "rings",
            Mode::Fans => "fans",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polytopes" => Ok(Mode::Polytopes),
            "multiplicities" => Ok(Mode::Multiplicities),
            "rings" => Ok(Mode::Rings),
            "fans" => Ok(Mode::Fans),
            other => Err(CoreError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

/// The mode-text registry: a mapping from [`Mode`] to free text.
///
/// Absent keys read as `""`. Only set entries are serialized, so a registry
/// written after a single update contains a single key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeTexts(BTreeMap<Mode, String>);

impl ModeTexts {
    /// Creates an empty registry (every mode reads as `""`).
    pub fn new() -> Self {
        ModeTexts::default()
    }

    /// The stored text for `mode`, defaulting to the empty string.
    pub fn get(&self, mode: Mode) -> &str {
        self.0.get(&mode).map(String::as_str).unwrap_or("")
    }

    /// Overwrites the stored text for `mode`.
    pub fn set(&mut self, mode: Mode, content: String) {
        self.0.insert(mode, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_all_lowercase_labels() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_rejects_unknown_labels() {
        assert!("unknownmode".parse::<Mode>().is_err());
        assert!("Polytopes".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Fans).unwrap(), "\"fans\"");
    }

    #[test]
    fn texts_default_to_empty_string() {
        let texts = ModeTexts::new();
        for mode in Mode::ALL {
            assert_eq!(texts.get(mode), "");
        }
    }

    #[test]
    fn texts_set_then_get_roundtrip() {
        let mut texts = ModeTexts::new();
        texts.set(Mode::Rings, "Cox ring notes".to_string());
        assert_eq!(texts.get(Mode::Rings), "Cox ring notes");
        assert_eq!(texts.get(Mode::Fans), "");
    }

    #[test]
    fn texts_serialize_only_set_entries() {
        let mut texts = ModeTexts::new();
        texts.set(Mode::Fans, "fan data".to_string());
        let json = serde_json::to_value(&texts).unwrap();
        assert_eq!(json, serde_json::json!({ "fans": "fan data" }));
    }
}
