//! Mode-text request/response types.

use serde::{Deserialize, Serialize};

use toric_core::{Mode, ModeTexts};

/// Request to overwrite one mode's text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTextRequest {
    /// The new content, stored verbatim.
    pub content: String,
}

/// Response carrying one mode's current text.
#[derive(Debug, Clone, Serialize)]
pub struct TextContentResponse {
    /// Stored content, `""` when unset.
    pub content: String,
}

/// Response confirming a text update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTextResponse {
    /// Always `"success"`.
    pub status: String,
    /// The mode that was written.
    pub mode: Mode,
}

/// Response carrying every mode's current text.
///
/// All four keys are always present, defaulting to `""`.
#[derive(Debug, Clone, Serialize)]
pub struct AllTextsResponse {
    pub polytopes: String,
    pub multiplicities: String,
    pub rings: String,
    pub fans: String,
}

impl AllTextsResponse {
    /// Projects the registry onto the fixed four-key response shape.
    pub fn from_texts(texts: &ModeTexts) -> Self {
        AllTextsResponse {
            polytopes: texts.get(Mode::Polytopes).to_string(),
            multiplicities: texts.get(Mode::Multiplicities).to_string(),
            rings: texts.get(Mode::Rings).to_string(),
            fans: texts.get(Mode::Fans).to_string(),
        }
    }
}
