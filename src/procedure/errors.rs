//! Answer errors
//!
//! Raised when an answer does not have the shape its question asked
//! for. The decision procedure turns these into an `error` outcome.

use thiserror::Error;

use super::question::QuestionId;
use crate::timeline::TimelineError;

/// Result type for answer extraction
pub type AnswerResult<T> = Result<T, AnswerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Question {question} expects {expected}, got {found}")]
    WrongShape {
        question: QuestionId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Question {question}: {source}")]
    InvalidDate {
        question: QuestionId,
        #[source]
        source: TimelineError,
    },

    #[error("Question {question}: {source}")]
    InvalidPeriod {
        question: QuestionId,
        #[source]
        source: TimelineError,
    },
}

impl AnswerError {
    /// The question whose answer was rejected
    pub fn question(&self) -> QuestionId {
        match self {
            AnswerError::WrongShape { question, .. }
            | AnswerError::InvalidDate { question, .. }
            | AnswerError::InvalidPeriod { question, .. } => *question,
        }
    }
}
