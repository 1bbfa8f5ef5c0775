//! # Data Loader Crate
//!
//! This crate owns the candidate data model and everything that gets
//! candidate records into memory.
//!
//! ## Main Components
//!
//! - **types**: `Candidate` plus the closed `Position` and `Status` label sets
//! - **parser**: Parse candidate JSON documents, optional integrity checks
//! - **source**: The `CandidateSource` trait and its HTTP, file and in-memory providers
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CandidateSource, HttpSource};
//!
//! let source = HttpSource::new(HttpSource::DEFAULT_BASE_URL)?;
//! let candidates = source.fetch().await?;
//!
//! println!("Fetched {} candidates", candidates.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Candidate, CandidateId, Position, Status};
pub use parser::{parse_candidates, parse_candidates_file, validate};
pub use source::{CandidateSource, FileSource, HttpSource, InMemorySource};
