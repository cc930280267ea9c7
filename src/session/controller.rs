//! Session controller
//!
//! Request/response surface over the decision procedure. Every state
//! change funnels through `replay`, which re-runs the procedure from
//! scratch over the retained history.

use std::collections::BTreeMap;

use uuid::Uuid;

use super::errors::{SessionError, SessionResult};
use super::history::{History, HistoryEntry};
use super::state::WalkState;
use crate::observability::{log_event_with_fields, Event};
use crate::procedure::{evaluate, Answer, Outcome, QuestionId, Step};
use crate::registry::CompanyRegistry;

#[derive(Debug)]
pub struct SessionController {
    registry: Box<dyn CompanyRegistry>,
    history: History,
    state: WalkState,
    walk_id: Option<Uuid>,
}

impl SessionController {
    /// Create an idle controller over the given registry.
    pub fn new(registry: Box<dyn CompanyRegistry>) -> Self {
        Self {
            registry,
            history: History::new(),
            state: WalkState::Idle,
            walk_id: None,
        }
    }

    pub fn state(&self) -> &WalkState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Identifier of the current walk, for log correlation.
    pub fn walk_id(&self) -> Option<Uuid> {
        self.walk_id
    }

    /// Begin a new walk with empty history.
    ///
    /// The first step of a walk is always a question.
    pub fn start(&mut self) -> Step {
        let walk_id = Uuid::new_v4();
        self.walk_id = Some(walk_id);
        self.history.clear();
        self.state = WalkState::Idle;

        log_event_with_fields(Event::WalkStart, &[("walk_id", &walk_id.to_string())]);
        self.replay()
    }

    /// Record an answer to the pending question and move forward.
    ///
    /// # Errors
    ///
    /// `NotStarted` before `start`, `WalkComplete` once a terminal
    /// outcome has been reached. History is untouched in both cases.
    pub fn submit_answer(&mut self, answer: Answer) -> SessionResult<Step> {
        let question_id = match &self.state {
            WalkState::Pending(question) => question.id,
            WalkState::Idle => return Err(self.misuse(SessionError::NotStarted)),
            WalkState::Complete(_) => return Err(self.misuse(SessionError::WalkComplete)),
        };

        self.history.push(question_id, answer);
        log_event_with_fields(
            Event::AnswerRecorded,
            &[
                ("question_id", &question_id.to_string()),
                ("walk_id", &self.walk_label()),
            ],
        );
        Ok(self.replay())
    }

    /// Drop the last answer and replay. `None` if there is nothing to undo.
    pub fn go_back(&mut self) -> Option<Step> {
        let dropped = self.history.pop()?;
        self.log_replay(dropped.question_id);
        Some(self.replay())
    }

    /// Rewind to the first occurrence of `question_id` and replay.
    ///
    /// That answer and everything after it are discarded. `None` if the
    /// question has not been answered in this walk.
    pub fn go_to_question(&mut self, question_id: QuestionId) -> Option<Step> {
        let position = self.history.position_of(question_id)?;
        self.history.truncate(position);
        self.log_replay(question_id);
        Some(self.replay())
    }

    /// Snapshot of answers by question id, for inspection only.
    pub fn current_state(&self) -> BTreeMap<QuestionId, Answer> {
        self.history.snapshot()
    }

    /// The stored outcome, else the pending question, else `None`.
    pub fn current(&self) -> Option<Step> {
        self.state.to_step()
    }

    fn replay(&mut self) -> Step {
        let answers = self.history.answers();
        let evaluation = evaluate(&answers, &*self.registry);

        // Answers past a terminal rule can never be reached again.
        self.history.truncate(evaluation.answers_used);

        self.observe(&evaluation.step);
        self.state = WalkState::from(evaluation.step.clone());
        evaluation.step
    }

    fn observe(&self, step: &Step) {
        let walk_id = self.walk_label();
        match step {
            Step::Question(q) => log_event_with_fields(
                Event::QuestionEmitted,
                &[
                    ("question_id", &q.id.to_string()),
                    ("sequence_number", &q.sequence_number.to_string()),
                    ("walk_id", &walk_id),
                ],
            ),
            Step::Complete(Outcome::Success {
                cnf_required,
                deadline,
                rule,
                ..
            }) => log_event_with_fields(
                Event::VerdictReached,
                &[
                    ("cnf_required", &cnf_required.to_string()),
                    (
                        "deadline",
                        &deadline.map(|d| d.to_string()).unwrap_or_default(),
                    ),
                    ("rule", &format!("{:?}", rule)),
                    ("walk_id", &walk_id),
                ],
            ),
            Step::Complete(Outcome::Error { message }) => log_event_with_fields(
                Event::WalkFailed,
                &[("message", message), ("walk_id", &walk_id)],
            ),
        }
    }

    fn log_replay(&self, from_question: QuestionId) {
        log_event_with_fields(
            Event::ReplayBegin,
            &[
                ("from_question", &from_question.to_string()),
                ("retained", &self.history.len().to_string()),
                ("walk_id", &self.walk_label()),
            ],
        );
    }

    fn misuse(&self, err: SessionError) -> SessionError {
        log_event_with_fields(
            Event::ProtocolMisuse,
            &[
                ("code", err.code()),
                ("state", self.state.state_name()),
            ],
        );
        err
    }

    fn walk_label(&self) -> String {
        self.walk_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedure::{QuestionKind, Rule};
    use crate::registry::InMemoryRegistry;

    fn controller() -> SessionController {
        SessionController::new(Box::new(InMemoryRegistry::new()))
    }

    fn question_id(step: &Step) -> QuestionId {
        step.question().expect("expected a question").id
    }

    #[test]
    fn test_submit_before_start_is_reported() {
        let mut session = controller();
        assert_eq!(
            session.submit_answer(Answer::from(true)),
            Err(SessionError::NotStarted)
        );
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_submit_after_complete_is_reported() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        session.submit_answer(Answer::from("2022-04-01")).unwrap();
        let done = session.submit_answer(Answer::from("2023-03-31")).unwrap();
        assert!(done.is_complete());

        assert_eq!(
            session.submit_answer(Answer::from("2024-01-01")),
            Err(SessionError::WalkComplete)
        );
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current(), Some(done));
    }

    #[test]
    fn test_start_resets_history() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        let first_walk = session.walk_id();

        let step = session.start();
        assert_eq!(question_id(&step), QuestionKind::UseAutomaticLookup.id());
        assert!(session.history().is_empty());
        assert_ne!(session.walk_id(), first_walk);
    }

    #[test]
    fn test_go_back_on_empty_history() {
        let mut session = controller();
        assert_eq!(session.go_back(), None);
        session.start();
        assert_eq!(session.go_back(), None);
    }

    #[test]
    fn test_go_back_leaves_terminal_state() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        session.submit_answer(Answer::from("2022-04-01")).unwrap();
        session.submit_answer(Answer::from("2023-03-31")).unwrap();
        assert!(session.state().is_complete());

        let step = session.go_back().unwrap();
        assert_eq!(question_id(&step), QuestionKind::PeriodEnd.id());
        assert!(!session.state().is_complete());
    }

    #[test]
    fn test_go_to_unknown_question() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        assert_eq!(session.go_to_question(QuestionKind::AmendmentDate.id()), None);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_go_to_question_truncates() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        session.submit_answer(Answer::from("2023-04-01")).unwrap();
        session.submit_answer(Answer::from("2024-03-31")).unwrap();

        let step = session.go_to_question(QuestionKind::PeriodStart.id()).unwrap();
        assert_eq!(question_id(&step), QuestionKind::PeriodStart.id());
        assert_eq!(session.history().len(), 1);

        let step = session.submit_answer(Answer::from("2022-04-01")).unwrap();
        assert_eq!(question_id(&step), QuestionKind::PeriodEnd.id());
        let done = session.submit_answer(Answer::from("2023-03-31")).unwrap();
        assert_eq!(
            done.outcome().and_then(Outcome::rule),
            Some(Rule::PeriodBeforeRequirementDate)
        );
    }

    #[test]
    fn test_current_state_snapshot() {
        let mut session = controller();
        session.start();
        session.submit_answer(Answer::from(false)).unwrap();
        session.submit_answer(Answer::from("2023-04-01")).unwrap();

        let state = session.current_state();
        assert_eq!(state.len(), 2);
        assert_eq!(state[&QuestionKind::UseAutomaticLookup.id()], Answer::from(false));
        assert_eq!(state[&QuestionKind::PeriodStart.id()], Answer::from("2023-04-01"));
    }
}
