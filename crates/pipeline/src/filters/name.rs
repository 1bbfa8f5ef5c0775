//! Filter on candidate names.
//!
//! Case-insensitive substring search, so "ali" finds both
//! "Alice Johnson" and "Alicia Stone".

use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates whose name contains the query.
///
/// ## Algorithm
/// 1. Trim the raw query; an empty result disables the filter
/// 2. Lowercase it once up front
/// 3. Keep candidates whose lowercased name contains it anywhere
pub struct NameFilter {
    query: Option<String>,
}

impl NameFilter {
    /// Create a NameFilter from the raw text of the name field.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let query = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self { query }
    }

    /// The normalized query, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn is_active(&self) -> bool {
        self.query.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        match &self.query {
            Some(query) => candidate.name.to_lowercase().contains(query.as_str()),
            None => true,
        }
    }
}
