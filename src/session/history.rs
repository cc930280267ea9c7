//! Answer history
//!
//! Ordered by occurrence. A question id may appear more than once across
//! walks down different branches, so history is keyed by position.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::procedure::{Answer, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub question_id: QuestionId,
    pub answer: Answer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question_id: QuestionId, answer: Answer) {
        self.entries.push(HistoryEntry {
            question_id,
            answer,
        });
    }

    /// Drop the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Keep only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Position of the first entry answering `question_id`.
    pub fn position_of(&self, question_id: QuestionId) -> Option<usize> {
        self.entries.iter().position(|e| e.question_id == question_id)
    }

    /// Answers in occurrence order, for replay.
    pub fn answers(&self) -> Vec<Answer> {
        self.entries.iter().map(|e| e.answer.clone()).collect()
    }

    /// Id → answer snapshot. Later occurrences overwrite earlier ones.
    pub fn snapshot(&self) -> BTreeMap<QuestionId, Answer> {
        self.entries
            .iter()
            .map(|e| (e.question_id, e.answer.clone()))
            .collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
