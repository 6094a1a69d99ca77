//! Core error types for toric-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! the failure modes of the domain data model (enum parsing).

use thiserror::Error;

/// Core errors produced by the toric-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A mode label outside the four-value set was supplied.
    #[error("unknown mode: '{value}'")]
    UnknownMode { value: String },

    /// A lattice type other than square or hexagonal was supplied.
    #[error("unknown lattice type: '{value}'")]
    UnknownLatticeType { value: String },
}
