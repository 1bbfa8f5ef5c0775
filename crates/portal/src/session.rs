//! # Portal Session
//!
//! The caller side of the filter engine. A session owns:
//! 1. The candidate source and the last successfully fetched list
//! 2. The current filter input
//! 3. The cascading lock policy between the filter fields
//!
//! Every read of the visible list recomputes it from those two values;
//! there is no cached result to go stale.
//!
//! ## Cascading locks
//! Position unlocks once a name is typed, status once a position is
//! chosen. When a field locks again its value is cleared here, so the
//! engine never sees a constraint the user can no longer see.

use std::fmt;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use data_loader::{Candidate, CandidateSource, validate};
use pipeline::{FilterSpec, filter_candidates};

/// The four filter inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Position,
    Status,
    Experience,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Position,
        FilterField::Status,
        FilterField::Experience,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Name => "Candidate Name",
            FilterField::Position => "Position",
            FilterField::Status => "Status",
            FilterField::Experience => "Experience",
        }
    }

    /// What the user has to do before this field accepts input
    pub fn unlock_hint(self) -> Option<&'static str> {
        match self {
            FilterField::Position => Some("Type name to unlock"),
            FilterField::Status => Some("Select position to unlock"),
            FilterField::Name | FilterField::Experience => None,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised by session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{field} filter is locked: {hint}")]
    Locked {
        field: FilterField,
        hint: &'static str,
    },
}

/// What the portal should show right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalView {
    /// No fetch has completed yet
    Loading,
    /// The last fetch failed
    Failed(String),
    /// Data is loaded but nothing matches the filters
    Empty,
    /// Matching candidates, in source order
    Results(Vec<Candidate>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FetchState {
    Pending,
    Ready,
    Failed(String),
}

/// One user's view of the candidate list
pub struct PortalSession {
    source: Box<dyn CandidateSource>,
    candidates: Vec<Candidate>,
    filters: FilterSpec,
    state: FetchState,
}

impl PortalSession {
    /// Create a session; nothing is fetched until [`refresh`](Self::refresh).
    pub fn new(source: impl CandidateSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            candidates: Vec::new(),
            filters: FilterSpec::default(),
            state: FetchState::Pending,
        }
    }

    /// Fetch the full candidate list from the source.
    ///
    /// On failure the previously fetched list is kept, but the view
    /// reports the error until a later refresh succeeds.
    ///
    /// # Returns
    /// The number of candidates fetched
    pub async fn refresh(&mut self) -> Result<usize> {
        let origin = self.source.describe();
        info!("Fetching candidates from {}", origin);

        match self.source.fetch().await {
            Ok(candidates) => {
                if let Err(e) = validate(&candidates) {
                    warn!("Candidate data from {} failed validation: {}", origin, e);
                }
                let count = candidates.len();
                self.candidates = candidates;
                self.state = FetchState::Ready;
                info!("Cached {} candidates", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Fetching candidates from {} failed: {}", origin, e);
                self.state = FetchState::Failed(e.to_string());
                Err(e).with_context(|| format!("Failed to fetch candidates from {origin}"))
            }
        }
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Every cached candidate, unfiltered
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Whether a field currently accepts input
    pub fn is_enabled(&self, field: FilterField) -> bool {
        match field {
            FilterField::Name | FilterField::Experience => true,
            FilterField::Position => !self.filters.name.trim().is_empty(),
            FilterField::Status => {
                !self.filters.position.is_empty() && self.is_enabled(FilterField::Position)
            }
        }
    }

    /// Fields that currently refuse input, in display order
    pub fn locked_fields(&self) -> Vec<FilterField> {
        FilterField::ALL
            .into_iter()
            .filter(|field| !self.is_enabled(*field))
            .collect()
    }

    /// Change one filter field.
    ///
    /// Writing a non-empty value to a locked field is refused. Clearing a
    /// field is always allowed and cascades: fields that lock as a result
    /// are emptied.
    pub fn set_filter(
        &mut self,
        field: FilterField,
        value: impl Into<String>,
    ) -> std::result::Result<(), SessionError> {
        let value = value.into();
        if !value.is_empty() && !self.is_enabled(field) {
            return Err(SessionError::Locked {
                field,
                hint: field.unlock_hint().unwrap_or_default(),
            });
        }

        debug!("Setting {} filter to {:?}", field, value);
        match field {
            FilterField::Name => self.filters.name = value,
            FilterField::Position => self.filters.position = value,
            FilterField::Status => self.filters.status = value,
            FilterField::Experience => self.filters.experience = value,
        }
        self.clear_locked_fields();
        Ok(())
    }

    /// Drop every filter
    pub fn reset(&mut self) {
        debug!("Resetting filters");
        self.filters = FilterSpec::default();
    }

    /// Candidates matching the current filters
    pub fn visible(&self) -> Vec<Candidate> {
        filter_candidates(&self.candidates, &self.filters)
    }

    /// Number of candidates matching the current filters
    pub fn active_count(&self) -> usize {
        self.visible().len()
    }

    /// Decide what to render
    pub fn view(&self) -> PortalView {
        match &self.state {
            FetchState::Pending => PortalView::Loading,
            FetchState::Failed(message) => PortalView::Failed(message.clone()),
            FetchState::Ready => {
                let visible = self.visible();
                if visible.is_empty() {
                    PortalView::Empty
                } else {
                    PortalView::Results(visible)
                }
            }
        }
    }

    fn clear_locked_fields(&mut self) {
        if !self.is_enabled(FilterField::Position) && !self.filters.position.is_empty() {
            debug!("Position filter locked, clearing it");
            self.filters.position.clear();
        }
        if !self.is_enabled(FilterField::Status) && !self.filters.status.is_empty() {
            debug!("Status filter locked, clearing it");
            self.filters.status.clear();
        }
    }
}
