//! Polytope records as the API stores them.
//!
//! A polytope here is a named, labeled list of 2D integer coordinates. No
//! geometric validation is performed: points may repeat, need not be convex,
//! and the lattice type is a tag, not an input to any computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A 2D integer coordinate pair.
pub type Point = [i64; 2];

/// The lattice a polytope's points are read against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeType {
    #[default]
    Square,
    Hexagonal,
}

impl LatticeType {
    /// The lowercase wire form of this lattice type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LatticeType::Square => "square",
            LatticeType::Hexagonal => "hexagonal",
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LatticeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(LatticeType::Square),
            "hexagonal" => Ok(LatticeType::Hexagonal),
            other => Err(CoreError::UnknownLatticeType {
                value: other.to_string(),
            }),
        }
    }
}

/// A stored polytope record.
///
/// All fields except `name` carry serde defaults so that records written by
/// older or hand-edited files still load. `name` is mandatory; a file
/// without one fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polytope {
    /// Display name; also the storage identity after sanitization.
    pub name: String,
    /// Lattice tag (defaults to square when absent).
    #[serde(default)]
    pub lattice_type: LatticeType,
    /// Ordered coordinate pairs.
    #[serde(default)]
    pub points: Vec<Point>,
    /// ISO-8601 local-time creation timestamp, assigned by storage.
    #[serde(default)]
    pub created_at: String,
    /// ISO-8601 local-time update timestamp, assigned by storage.
    #[serde(default)]
    pub updated_at: String,
}

/// Lightweight view of a polytope for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolytopeSummary {
    /// Display name.
    pub name: String,
    /// Lattice tag.
    pub lattice_type: LatticeType,
    /// Number of stored coordinate pairs.
    pub point_count: usize,
    /// Creation timestamp as stored.
    pub created_at: String,
    /// Update timestamp as stored.
    pub updated_at: String,
}

impl PolytopeSummary {
    /// Builds the summary view of a full record.
    pub fn of(polytope: &Polytope) -> Self {
        PolytopeSummary {
            name: polytope.name.clone(),
            lattice_type: polytope.lattice_type,
            point_count: polytope.points.len(),
            created_at: polytope.created_at.clone(),
            updated_at: polytope.updated_at.clone(),
        }
    }
}
