//! Filter implementations for the candidate pipeline.
//!
//! One filter per [`crate::FilterSpec`] field. Each is built from the raw
//! field text and decides for itself what "no constraint" looks like.

pub mod experience;
pub mod name;
pub mod position;
pub mod status;

// Re-export for convenience
pub use experience::{ExperienceFilter, parse_experience};
pub use name::NameFilter;
pub use position::PositionFilter;
pub use status::StatusFilter;
