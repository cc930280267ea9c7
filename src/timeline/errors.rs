//! Timeline error types

use thiserror::Error;

/// Result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Date and period errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid period: start {start} is after end {end}")]
    InvertedPeriod { start: String, end: String },

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}
