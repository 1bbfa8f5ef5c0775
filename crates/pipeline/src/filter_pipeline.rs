//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and
//! [`filter_candidates`], the entry point callers use on every change to
//! the filter input.

use crate::filters::{ExperienceFilter, NameFilter, PositionFilter, StatusFilter};
use crate::spec::FilterSpec;
use crate::traits::Filter;
use data_loader::Candidate;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// A candidate survives only if every active filter accepts it. Filters
/// never reorder, so the output keeps the input order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameFilter::new("ali"))
///     .add_filter(StatusFilter::new("Hired"));
///
/// let visible = pipeline.apply(&candidates);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the standard pipeline for a spec: name, position, status,
    /// then experience.
    pub fn for_spec(spec: &FilterSpec) -> Self {
        Self::new()
            .add_filter(NameFilter::new(&spec.name))
            .add_filter(PositionFilter::new(&spec.position))
            .add_filter(StatusFilter::new(&spec.status))
            .add_filter(ExperienceFilter::new(&spec.experience))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters that will actually run
    pub fn active_filters(&self) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|f| f.is_active())
            .map(|f| f.name())
            .collect()
    }

    /// Apply all active filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Copy the input into a fresh Vec (the input is never touched)
    /// 2. For each active filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the candidates it matches
    ///    c. Log output count
    /// 3. Return what is left
    pub fn apply(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        let mut current = candidates.to_vec();
        for filter in self.filters.iter().filter(|f| f.is_active()) {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Produce the candidates matching every active field of `spec`.
///
/// Pure and total: the input is left untouched, the result keeps input
/// order, and no input can make it fail.
pub fn filter_candidates(candidates: &[Candidate], spec: &FilterSpec) -> Vec<Candidate> {
    FilterPipeline::for_spec(spec).apply(candidates)
}
