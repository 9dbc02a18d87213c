//! Unified error type for the booking engine
//!
//! Every engine operation returns `EngineResult<T>`; a rejected mutation
//! carries enough detail for the caller to surface actionable feedback
//! (which booking conflicts, which capability is missing) and leaves the
//! reservation collection untouched.

use crate::models::{Booking, Permission, TimeFormat};
use crate::util::format_time;
use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Proposed interval overlaps an existing open booking on the same
    /// court and date. Carries the obstruction so the UI can show who/when.
    #[error(
        "Conflict detected on {} at {} (Court: {})",
        .conflict.date,
        format_time(.conflict.start_time, TimeFormat::H24),
        .conflict.court_id
    )]
    Conflict { conflict: Box<Booking> },

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(Permission),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn conflict(conflict: Booking) -> Self {
        Self::Conflict {
            conflict: Box::new(conflict),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The conflicting booking, when this is a conflict rejection.
    pub fn conflicting_booking(&self) -> Option<&Booking> {
        match self {
            Self::Conflict { conflict } => Some(conflict),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
