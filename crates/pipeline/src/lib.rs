//! Pipeline for filtering recruitment candidates.
//!
//! This crate provides:
//! - FilterSpec, the raw text of the four filter fields
//! - Filter trait and one implementation per field
//! - FilterPipeline for composing filters
//! - `filter_candidates`, the one-call entry point
//!
//! ## Matching rules
//! All active filters are combined with AND:
//! 1. Name: trimmed, case-insensitive substring
//! 2. Position: exact label
//! 3. Status: exact label
//! 4. Experience: exact whole number; unparsable text disables the filter
//!
//! Empty fields constrain nothing. Nothing here knows about the portal's
//! cascading field locks; a position or status in a `FilterSpec` is honoured
//! whether or not a name was typed.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_candidates, FilterSpec};
//!
//! let spec = FilterSpec::new().with_name("ali").with_status("Hired");
//! let visible = filter_candidates(&candidates, &spec);
//! ```

pub mod traits;
pub mod spec;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use spec::FilterSpec;
pub use filter_pipeline::{FilterPipeline, filter_candidates};
