//! Parser for candidate documents.
//!
//! Two shapes are accepted:
//! - a bare array, as served by `GET /candidates`
//! - a json-server database file: `{"candidates": [...]}`

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::Error as _;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Parse a candidate document from a JSON string
pub fn parse_candidates(input: &str) -> Result<Vec<Candidate>> {
    let document: Value = serde_json::from_str(input)?;

    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => fields.remove("candidates").ok_or_else(|| {
            serde_json::Error::custom("expected an array or an object with a \"candidates\" key")
        })?,
        _ => {
            return Err(serde_json::Error::custom(
                "expected an array or an object with a \"candidates\" key",
            )
            .into());
        }
    };

    Ok(serde_json::from_value(list)?)
}

/// Read and parse a candidate document from disk
pub fn parse_candidates_file(path: &Path) -> Result<Vec<Candidate>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    parse_candidates(&content)
}

/// Check record integrity
///
/// Check that:
/// - No two records share an id
/// - Every position is one of [`Position::ALL`]
/// - Every status is one of [`Status::ALL`]
///
/// The filter engine never calls this; loaders use it to warn about data
/// the portal menus cannot represent.
pub fn validate(candidates: &[Candidate]) -> Result<()> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !seen.insert(candidate.id) {
            return Err(DataLoadError::DuplicateId { id: candidate.id });
        }
        if candidate.position.parse::<Position>().is_err() {
            return Err(DataLoadError::UnknownLabel {
                field: "position".to_string(),
                id: candidate.id,
                value: candidate.position.clone(),
            });
        }
        if candidate.status.parse::<Status>().is_err() {
            return Err(DataLoadError::UnknownLabel {
                field: "status".to_string(),
                id: candidate.id,
                value: candidate.status.clone(),
            });
        }
    }
    Ok(())
}
