//! Filter on the applied-for position.

use crate::traits::Filter;
use data_loader::Candidate;

/// Keeps candidates whose position equals the selected label exactly.
///
/// Only an empty selection disables the filter; the comparison is
/// case-sensitive and does not trim, matching how menu values are stored.
pub struct PositionFilter {
    position: Option<String>,
}

impl PositionFilter {
    pub fn new(raw: &str) -> Self {
        Self {
            position: (!raw.is_empty()).then(|| raw.to_string()),
        }
    }
}

impl Filter for PositionFilter {
    fn name(&self) -> &str {
        "PositionFilter"
    }

    fn is_active(&self) -> bool {
        self.position.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.position
            .as_deref()
            .is_none_or(|position| candidate.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::{ids, roster};

    #[test]
    fn test_position_filter() {
        let filtered = PositionFilter::new("Backend Developer").apply(roster());
        assert_eq!(ids(&filtered), vec![2]);

        let filtered = PositionFilter::new("Frontend Developer").apply(roster());
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn test_position_filter_is_case_sensitive() {
        assert!(PositionFilter::new("backend developer").apply(roster()).is_empty());
    }

    #[test]
    fn test_empty_position_is_inactive() {
        let filter = PositionFilter::new("");
        assert!(!filter.is_active());
        assert_eq!(filter.apply(roster()).len(), 4);
    }
}
