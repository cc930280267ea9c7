//! Session protocol errors
//!
//! Misuse is reported, never panicked on; the session stays usable.

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No active question: call start first")]
    NotStarted,

    #[error("No active question: the walk is complete")]
    WalkComplete,
}

impl SessionError {
    /// Stable error code for presenter responses
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::NotStarted => "CNF_SESSION_NOT_STARTED",
            SessionError::WalkComplete => "CNF_SESSION_WALK_COMPLETE",
        }
    }
}
