pub mod error;
pub mod mode;
pub mod polytope;
pub mod sanitize;

// Re-export commonly used types
pub use error::CoreError;
pub use mode::{Mode, ModeTexts};
pub use polytope::{LatticeType, Point, Polytope, PolytopeSummary};
pub use sanitize::sanitize_name;
