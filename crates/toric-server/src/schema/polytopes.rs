//! Polytope request/response types.

use serde::{Deserialize, Serialize};

use toric_core::{LatticeType, Point, Polytope, PolytopeSummary};

/// Request to save (upsert) a polytope.
#[derive(Debug, Clone, Deserialize)]
pub struct SavePolytopeRequest {
    /// Display name; also the storage identity after sanitization.
    pub name: String,
    /// Lattice tag.
    pub lattice_type: LatticeType,
    /// Ordered coordinate pairs.
    pub points: Vec<Point>,
}

/// Response from saving a polytope.
#[derive(Debug, Clone, Serialize)]
pub struct SavePolytopeResponse {
    /// Always `"success"`.
    pub status: String,
    /// The stored record, including assigned timestamps.
    pub polytope: Polytope,
}

/// Response for listing all polytopes.
#[derive(Debug, Clone, Serialize)]
pub struct PolytopeListResponse {
    /// Summaries sorted by name (case-sensitive ordinal).
    pub polytopes: Vec<PolytopeSummary>,
}

/// Response confirming a deletion.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePolytopeResponse {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
}
