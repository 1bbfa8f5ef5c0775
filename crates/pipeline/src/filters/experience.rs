//! Filter on years of experience.
//!
//! Exact match only. Text that is not a whole number switches the filter
//! off instead of hiding every candidate.

use crate::traits::Filter;
use data_loader::Candidate;

/// Parse the experience field.
///
/// After trimming, the text must be an optional sign followed by ASCII
/// digits and fit in an `i64`. Decimals ("4.0"), exponents ("1e1"),
/// trailing garbage ("4y") and blank input all yield `None`.
pub fn parse_experience(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Keeps candidates with exactly the requested years of experience.
///
/// Negative values parse fine but no candidate can have them, so they
/// produce an empty result rather than disabling the filter.
pub struct ExperienceFilter {
    years: Option<i64>,
}

impl ExperienceFilter {
    pub fn new(raw: &str) -> Self {
        Self {
            years: parse_experience(raw),
        }
    }
}

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn is_active(&self) -> bool {
        self.years.is_some()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        self.years
            .is_none_or(|years| i64::from(candidate.experience) == years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::{ids, roster};

    #[test]
    fn test_parse_experience_accepts_whole_numbers() {
        assert_eq!(parse_experience("4"), Some(4));
        assert_eq!(parse_experience(" 12 "), Some(12));
        assert_eq!(parse_experience("007"), Some(7));
        assert_eq!(parse_experience("+3"), Some(3));
        assert_eq!(parse_experience("-1"), Some(-1));
    }

    #[test]
    fn test_parse_experience_rejects_everything_else() {
        for raw in ["", "   ", "abc", "4y", "4.0", "1e1", "4 5", "99999999999999999999"] {
            assert_eq!(parse_experience(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_experience_filter_exact_match() {
        assert_eq!(ids(&ExperienceFilter::new("4").apply(roster())), vec![4]);
        assert!(ExperienceFilter::new("2").apply(roster()).is_empty());
    }

    #[test]
    fn test_malformed_experience_is_inactive() {
        let filter = ExperienceFilter::new("abc");
        assert!(!filter.is_active());
        assert_eq!(ids(&filter.apply(roster())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_negative_experience_matches_nothing() {
        let filter = ExperienceFilter::new("-4");
        assert!(filter.is_active());
        assert!(filter.apply(roster()).is_empty());
    }
}
