//! Filter on the pipeline stage.

use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates whose status equals the selected label exactly.
pub struct StatusFilter {
    status: Option<String>,
}

impl StatusFilter {
    pub fn new(raw: &str) -> Self {
        Self {
            status: (!raw.is_empty()).then(|| raw.to_string()),
        }
    }
}

impl Filter for StatusFilter {
    fn name(&self) -> &str {
        "StatusFilter"
    }

    fn is_active(&self) -> bool {
        self.status.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| candidate.status == status)
    }
}
