//! Recruitment portal session layer.
//!
//! This crate sits between a candidate source and whatever renders the
//! list: it caches fetched candidates, holds the filter input, enforces
//! the cascading field locks and recomputes the visible list through the
//! pipeline crate.

pub mod session;
pub mod style;

pub use session::{FilterField, PortalSession, PortalView, SessionError};
pub use style::{ACCENT, Rgb, StatusStyle, status_style};
