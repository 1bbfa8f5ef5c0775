//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate lists.

use data_loader::Candidate;

/// Core trait for filtering candidates.
///
/// A filter is built from one field of a [`crate::FilterSpec`] and holds
/// its already-normalized constraint, so `matches` does no parsing.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - An inactive filter lets every candidate through and is skipped by
///   the pipeline entirely
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether this filter constrains anything at all
    fn is_active(&self) -> bool {
        true
    }

    /// Does a single candidate satisfy this filter?
    fn matches(&self, candidate: &Candidate) -> bool;

    /// Apply this filter to a set of candidates, keeping their order.
    fn apply(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        if self.is_active() {
            candidates.retain(|candidate| self.matches(candidate));
        }
        candidates
    }
}
