//! Core domain types for the recruitment portal.
//!
//! A [`Candidate`] keeps its position and status as plain strings: the label
//! sets are owned by the backend and the filter engine compares them
//! verbatim. [`Position`] and [`Status`] enumerate the labels the portal
//! knows about, for menus and for the optional integrity check.

use crate::error::{DataLoadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a candidate, assigned by the backend
pub type CandidateId = u32;

// =============================================================================
// Candidate
// =============================================================================

/// One applicant as served by the candidates endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    /// Contact address, kept opaque
    pub email: String,
    pub position: String,
    pub status: String,
    /// Years of experience
    pub experience: u32,
}

impl Candidate {
    pub fn new(
        id: CandidateId,
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        status: impl Into<String>,
        experience: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            position: position.into(),
            status: status.into(),
            experience,
        }
    }
}

// =============================================================================
// Label sets
// =============================================================================

/// Roles a candidate can apply for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Product Manager")]
    ProductManager,
    Designer,
}

impl Position {
    /// Every position, in menu order
    pub const ALL: [Position; 4] = [
        Position::FrontendDeveloper,
        Position::BackendDeveloper,
        Position::ProductManager,
        Position::Designer,
    ];

    /// The label exactly as it appears on candidate records
    pub fn label(self) -> &'static str {
        match self {
            Position::FrontendDeveloper => "Frontend Developer",
            Position::BackendDeveloper => "Backend Developer",
            Position::ProductManager => "Product Manager",
            Position::Designer => "Designer",
        }
    }
}

impl FromStr for Position {
    type Err = DataLoadError;

    /// Case-sensitive: "frontend developer" is not a position.
    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| DataLoadError::InvalidValue {
                field: "position".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipeline stages a candidate moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    New,
    Interview,
    Hired,
    Rejected,
}

impl Status {
    /// Every status, in menu order
    pub const ALL: [Status; 4] = [Status::New, Status::Interview, Status::Hired, Status::Rejected];

    pub fn label(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Interview => "Interview",
            Status::Hired => "Hired",
            Status::Rejected => "Rejected",
        }
    }
}

impl FromStr for Status {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|st| st.label() == s)
            .ok_or_else(|| DataLoadError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
