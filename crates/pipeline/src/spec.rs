//! The user-controlled query the filters are built from.

use serde::{Deserialize, Serialize};

/// Current filter input, exactly as typed or selected.
///
/// Every field is raw text: an empty string means "no constraint", and the
/// individual filters decide how to trim or parse their field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Substring to look for in candidate names
    pub name: String,
    /// Exact position label, or empty
    pub position: String,
    /// Exact status label, or empty
    pub status: String,
    /// Years of experience as text; may be malformed
    pub experience: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    /// True when no field holds any text at all
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.position.is_empty()
            && self.status.is_empty()
            && self.experience.is_empty()
    }
}
