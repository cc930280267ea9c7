//! Walk state
//!
//! - `Idle`: no walk started
//! - `Pending`: exactly one question awaiting an answer
//! - `Complete`: terminal outcome; only `start` or navigation leaves it

use crate::procedure::{Outcome, Question, Step};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WalkState {
    #[default]
    Idle,
    Pending(Question),
    Complete(Outcome),
}

impl WalkState {
    pub fn state_name(&self) -> &'static str {
        match self {
            WalkState::Idle => "Idle",
            WalkState::Pending(_) => "Pending",
            WalkState::Complete(_) => "Complete",
        }
    }

    pub fn pending_question(&self) -> Option<&Question> {
        match self {
            WalkState::Pending(q) => Some(q),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            WalkState::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, WalkState::Complete(_))
    }

    /// The presenter-facing view; `None` while idle.
    pub fn to_step(&self) -> Option<Step> {
        match self {
            WalkState::Idle => None,
            WalkState::Pending(q) => Some(Step::Question(q.clone())),
            WalkState::Complete(outcome) => Some(Step::Complete(outcome.clone())),
        }
    }
}

impl From<Step> for WalkState {
    fn from(step: Step) -> Self {
        match step {
            Step::Question(q) => WalkState::Pending(q),
            Step::Complete(outcome) => WalkState::Complete(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedure::{QuestionConfig, QuestionKind};

    #[test]
    fn test_idle_has_no_step() {
        let state = WalkState::default();
        assert_eq!(state.state_name(), "Idle");
        assert_eq!(state.to_step(), None);
    }

    #[test]
    fn test_round_trip_through_step() {
        let q = Question::new(QuestionKind::UseAutomaticLookup, QuestionConfig::Boolean, 1);
        let state = WalkState::from(Step::Question(q.clone()));
        assert_eq!(state.pending_question(), Some(&q));
        assert_eq!(state.to_step(), Some(Step::Question(q)));

        let state = WalkState::from(Step::Complete(Outcome::error("x")));
        assert!(state.is_complete());
        assert_eq!(state.state_name(), "Complete");
    }
}
