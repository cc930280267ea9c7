//! Session navigation invariants
//!
//! - Going back and re-answering reproduces the forward state
//! - Jumping to a question discards it and everything after it
//! - Jumping to an unanswered question is a no-op
//! - Replays repeat the registry lookup

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use cnf_checker::procedure::{Answer, Outcome, QuestionKind, Rule, Step};
use cnf_checker::registry::{
    CompanyNumber, CompanyProfile, CompanyRegistry, FallbackRegistry, InMemoryRegistry,
    RegistryResult,
};
use cnf_checker::session::{SessionController, SessionError};
use common::{a, march_registry, CountingOffline};

fn manual_session() -> SessionController {
    SessionController::new(Box::new(InMemoryRegistry::new()))
}

fn answer_all(session: &mut SessionController, answers: &[Answer]) -> Step {
    let mut last = session.start();
    for answer in answers {
        last = session.submit_answer(answer.clone()).unwrap();
    }
    last
}

fn late_recent_claimant() -> Vec<Answer> {
    vec![
        a(false),
        a("2023-04-01"),
        a("2024-03-31"),
        a("2024-10-01"),
        a(true),
        a("2024-08-01"),
        a(false),
        a(false),
    ]
}

// =============================================================================
// go_back
// =============================================================================

#[test]
fn test_back_then_same_answer_reproduces_state() {
    let answers = late_recent_claimant();
    for n in 1..=answers.len() {
        let mut forward = manual_session();
        let expected = answer_all(&mut forward, &answers[..n]);

        let mut session = manual_session();
        answer_all(&mut session, &answers[..n]);
        session.go_back().unwrap();
        let replayed = session.submit_answer(answers[n - 1].clone()).unwrap();

        assert_eq!(replayed, expected, "diverged after {} answers", n);
        assert_eq!(session.history(), forward.history());
        assert_eq!(session.current(), forward.current());
    }
}

#[test]
fn test_back_from_verdict_returns_last_question() {
    let mut session = manual_session();
    let verdict = answer_all(&mut session, &late_recent_claimant());
    assert_eq!(
        verdict.outcome().and_then(Outcome::rule),
        Some(Rule::NoPreRegimeAmendment)
    );

    let step = session.go_back().unwrap();
    assert_eq!(
        step.question().and_then(|q| q.kind()),
        Some(QuestionKind::AmendedPreRegimeClaim)
    );
    assert_eq!(session.current(), Some(step));
}

#[test]
fn test_back_to_empty_history_returns_first_question() {
    let mut session = manual_session();
    answer_all(&mut session, &[a(false)]);
    let step = session.go_back().unwrap();
    assert_eq!(step.question().unwrap().id, QuestionKind::UseAutomaticLookup.id());
    assert!(session.history().is_empty());
    assert_eq!(session.go_back(), None);
}

// =============================================================================
// go_to_question
// =============================================================================

#[test]
fn test_goto_first_question_clears_history() {
    let mut session = manual_session();
    answer_all(&mut session, &late_recent_claimant());

    let step = session
        .go_to_question(QuestionKind::UseAutomaticLookup.id())
        .unwrap();
    assert!(session.history().is_empty());
    assert_eq!(step, manual_session().start());
}

#[test]
fn test_goto_unanswered_question_is_none() {
    let mut session = manual_session();
    answer_all(&mut session, &late_recent_claimant()[..3]);
    let before = session.current();

    assert_eq!(session.go_to_question(QuestionKind::AmendmentDate.id()), None);
    assert_eq!(session.go_to_question(QuestionKind::CompanyNumber.id()), None);
    assert_eq!(session.current(), before);
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_goto_with_empty_history_is_none() {
    let mut session = manual_session();
    assert_eq!(session.go_to_question(1), None);
    session.start();
    assert_eq!(session.go_to_question(1), None);
}

#[test]
fn test_goto_then_change_branch() {
    let mut session = manual_session();
    answer_all(&mut session, &late_recent_claimant());

    // Correct the submission date: now within the notification window
    session
        .go_to_question(QuestionKind::SubmissionDate.id())
        .unwrap();
    assert_eq!(session.history().len(), 3);

    let step = session.submit_answer(a("2024-09-01")).unwrap();
    assert_eq!(
        step.outcome().and_then(Outcome::rule),
        Some(Rule::SubmittedWithinNotificationPeriod)
    );
    assert!(!session
        .current_state()
        .contains_key(&QuestionKind::HasClaimedBefore.id()));
}

#[test]
fn test_switch_from_manual_to_lookup_branch() {
    let mut session = SessionController::new(Box::new(march_registry()));
    answer_all(&mut session, &[a(false), a("2023-04-01")]);

    session
        .go_to_question(QuestionKind::UseAutomaticLookup.id())
        .unwrap();
    session.submit_answer(a(true)).unwrap();
    let step = session.submit_answer(a("AB123456")).unwrap();
    assert_eq!(
        step.question().and_then(|q| q.kind()),
        Some(QuestionKind::ChoosePeriod)
    );
}

// =============================================================================
// Protocol misuse
// =============================================================================

#[test]
fn test_misuse_is_structured() {
    let mut session = manual_session();
    assert_eq!(session.submit_answer(a(true)), Err(SessionError::NotStarted));

    answer_all(&mut session, &[a(true), a("bad")]);
    assert!(session.current().unwrap().outcome().unwrap().is_error());
    assert_eq!(session.submit_answer(a(true)), Err(SessionError::WalkComplete));

    // Still usable afterwards
    assert!(session.start().question().is_some());
}

// =============================================================================
// Registry replays
// =============================================================================

#[derive(Debug, Clone)]
struct Shared(Arc<CountingOffline>);

impl CompanyRegistry for Shared {
    fn fetch_company_profile(&self, number: &CompanyNumber) -> RegistryResult<CompanyProfile> {
        self.0.fetch_company_profile(number)
    }
}

#[test]
fn test_navigation_repeats_lookup() {
    let counter = Arc::new(CountingOffline::default());
    let registry = FallbackRegistry::new(Shared(counter.clone()), CompanyProfile::placeholder());
    let mut session = SessionController::new(Box::new(registry));

    answer_all(&mut session, &[a(true), a("AB123456")]);
    let after_forward = counter.calls.load(Ordering::SeqCst);
    assert!(after_forward >= 1);

    let step = session.go_back().unwrap();
    assert_eq!(step.question().unwrap().id, QuestionKind::CompanyNumber.id());
    assert_eq!(counter.calls.load(Ordering::SeqCst), after_forward);

    session.submit_answer(a("AB123456")).unwrap();
    assert!(counter.calls.load(Ordering::SeqCst) > after_forward);
}
