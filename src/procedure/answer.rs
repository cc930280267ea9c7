//! Answers
//!
//! Answers are untyped on the wire: a JSON boolean, a period object or a
//! string. The question that produced them decides how they are read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{AnswerError, AnswerResult};
use super::question::QuestionId;
use crate::timeline::{parse_date, Period};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Boolean(bool),
    Period(Period),
    /// Free text and `YYYY-MM-DD` dates
    Text(String),
}

impl Answer {
    fn shape(&self) -> &'static str {
        match self {
            Answer::Boolean(_) => "a boolean",
            Answer::Period(_) => "a period",
            Answer::Text(_) => "text",
        }
    }

    fn wrong_shape(&self, question: QuestionId, expected: &'static str) -> AnswerError {
        AnswerError::WrongShape {
            question,
            expected,
            found: self.shape(),
        }
    }

    pub fn as_bool(&self, question: QuestionId) -> AnswerResult<bool> {
        match self {
            Answer::Boolean(value) => Ok(*value),
            other => Err(other.wrong_shape(question, "a boolean")),
        }
    }

    pub fn as_text(&self, question: QuestionId) -> AnswerResult<&str> {
        match self {
            Answer::Text(value) => Ok(value),
            other => Err(other.wrong_shape(question, "text")),
        }
    }

    pub fn as_date(&self, question: QuestionId) -> AnswerResult<NaiveDate> {
        let raw = match self {
            Answer::Text(value) => value,
            other => return Err(other.wrong_shape(question, "a date")),
        };
        parse_date(raw).map_err(|source| AnswerError::InvalidDate { question, source })
    }

    /// Read a period, re-checking `start <= end`.
    pub fn as_period(&self, question: QuestionId) -> AnswerResult<Period> {
        match self {
            Answer::Period(period) => {
                period
                    .validate()
                    .map_err(|source| AnswerError::InvalidPeriod { question, source })?;
                Ok(*period)
            }
            other => Err(other.wrong_shape(question, "a period")),
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Boolean(value)
    }
}

impl From<Period> for Answer {
    fn from(value: Period) -> Self {
        Answer::Period(value)
    }
}

impl From<NaiveDate> for Answer {
    fn from(value: NaiveDate) -> Self {
        Answer::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}
