//! Error types for the data-loader crate.
//!
//! Every way a candidate source can fail to produce records ends up here:
//! missing files, malformed JSON, unreachable backends and integrity
//! violations found by [`crate::parser::validate`].

use crate::types::CandidateId;
use thiserror::Error;

/// Errors that can occur while fetching or parsing candidate records
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document was not valid JSON, or not shaped like a candidate list
    #[error("Malformed candidate document: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-success status code
    #[error("Candidate source responded with HTTP {status}")]
    Http { status: u16 },

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request to candidate source failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A label that is not part of the closed position/status sets
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same id
    #[error("Duplicate candidate id {id}")]
    DuplicateId { id: CandidateId },

    /// A record carries a position or status outside the known label sets
    #[error("Unknown {field} label on candidate {id}: {value}")]
    UnknownLabel {
        field: String,
        id: CandidateId,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
