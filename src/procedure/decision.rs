//! The decision tree
//!
//! Rules are checked in order; the first terminal rule wins:
//!
//! 1. Period: registry lookup + period choice, or manual start/end dates
//! 2. Period starts before 1 April 2023 → not required
//! 3. Deadline = period end + 6 months
//! 4. Submitted on or before the deadline → not required
//! 5. Never claimed before → required
//! 6. Most recent claim before deadline − 3 years → required
//! 7. Any claim rejected → required
//! 8. No pre-regime claim amended → not required
//! 9. Guidance-error exception → not required (checked before 10)
//! 10. Amended on or after 1 April 2023 → required, else not required

use chrono::NaiveDate;
use serde::Serialize;

use super::answer::Answer;
use super::errors::AnswerError;
use super::outcome::{Outcome, Rule};
use super::question::{Question, QuestionConfig, QuestionKind};
use crate::registry::{CompanyNumber, CompanyRegistry, RegistryError, COMPANY_NUMBER_PATTERN};
use crate::timeline::{
    amendment_in_guidance_window, deadline_in_guidance_window, is_cnf_required_by_start_date,
    sub_months, Period, TimelineError, CNF_REQUIREMENT_DATE, RECENT_CLAIM_MONTHS,
};

/// Number of registry periods offered for selection
pub const PERIOD_OPTIONS: usize = 3;

/// Where a walk stands after consuming the supplied answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// The next question to answer
    Question(Question),
    /// The walk is over
    #[serde(rename = "result")]
    Complete(Outcome),
}

impl Step {
    pub fn question(&self) -> Option<&Question> {
        match self {
            Step::Question(q) => Some(q),
            Step::Complete(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Step::Question(_) => None,
            Step::Complete(outcome) => Some(outcome),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }
}

/// A step plus the number of answers the walk consumed to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub step: Step,
    pub answers_used: usize,
}

/// Walk the tree with `answers` and return the next step.
pub fn advance(answers: &[Answer], registry: &dyn CompanyRegistry) -> Step {
    evaluate(answers, registry).step
}

/// Like `advance`, also reporting how many answers were consumed.
///
/// Answers past a terminal rule are never read.
pub fn evaluate(answers: &[Answer], registry: &dyn CompanyRegistry) -> Evaluation {
    let mut walk = Walk { answers, cursor: 0 };
    let step = match decide(&mut walk, registry) {
        Ok(outcome) | Err(Halt::Finish(outcome)) => Step::Complete(outcome),
        Err(Halt::Ask(question)) => Step::Question(question),
    };
    Evaluation {
        step,
        answers_used: walk.cursor,
    }
}

/// Why `decide` stopped short of a verdict
enum Halt {
    Ask(Question),
    Finish(Outcome),
}

impl From<AnswerError> for Halt {
    fn from(e: AnswerError) -> Self {
        Halt::Finish(Outcome::error(e.to_string()))
    }
}

impl From<RegistryError> for Halt {
    fn from(e: RegistryError) -> Self {
        Halt::Finish(Outcome::error(e.to_string()))
    }
}

impl From<TimelineError> for Halt {
    fn from(e: TimelineError) -> Self {
        Halt::Finish(Outcome::error(e.to_string()))
    }
}

/// Cursor over the answer list
struct Walk<'a> {
    answers: &'a [Answer],
    cursor: usize,
}

impl<'a> Walk<'a> {
    /// The answer to `kind`, or a halt that emits the question.
    fn ask(&mut self, kind: QuestionKind, config: QuestionConfig) -> Result<&'a Answer, Halt> {
        match self.answers.get(self.cursor) {
            Some(answer) => {
                self.cursor += 1;
                Ok(answer)
            }
            None => Err(Halt::Ask(Question::new(
                kind,
                config,
                self.cursor as u32 + 1,
            ))),
        }
    }

    fn ask_bool(&mut self, kind: QuestionKind) -> Result<bool, Halt> {
        Ok(self.ask(kind, QuestionConfig::Boolean)?.as_bool(kind.id())?)
    }

    fn ask_date(&mut self, kind: QuestionKind) -> Result<NaiveDate, Halt> {
        Ok(self.ask(kind, QuestionConfig::Date)?.as_date(kind.id())?)
    }
}

fn decide(walk: &mut Walk<'_>, registry: &dyn CompanyRegistry) -> Result<Outcome, Halt> {
    let period = choose_period(walk, registry)?;

    if !is_cnf_required_by_start_date(period.start) {
        return Ok(Outcome::verdict(Rule::PeriodBeforeRequirementDate, None));
    }

    let deadline = period.deadline()?;
    let verdict =
        |rule: Rule| -> Result<Outcome, Halt> { Ok(Outcome::verdict(rule, Some(deadline))) };

    let submitted_on = walk.ask_date(QuestionKind::SubmissionDate)?;
    if submitted_on <= deadline {
        return verdict(Rule::SubmittedWithinNotificationPeriod);
    }

    if !walk.ask_bool(QuestionKind::HasClaimedBefore)? {
        return verdict(Rule::FirstClaim);
    }

    let recent_claim_on = walk.ask_date(QuestionKind::RecentClaimDate)?;
    if recent_claim_on < sub_months(deadline, RECENT_CLAIM_MONTHS)? {
        return verdict(Rule::RecentClaimOutOfWindow);
    }

    if walk.ask_bool(QuestionKind::ClaimRejected)? {
        return verdict(Rule::PreviousClaimRejected);
    }

    if !walk.ask_bool(QuestionKind::AmendedPreRegimeClaim)? {
        return verdict(Rule::NoPreRegimeAmendment);
    }

    let amended_on = walk.ask_date(QuestionKind::AmendmentDate)?;
    if deadline_in_guidance_window(deadline) && amendment_in_guidance_window(amended_on) {
        return verdict(Rule::GuidanceErrorException);
    }
    if amended_on >= CNF_REQUIREMENT_DATE {
        verdict(Rule::AmendedOnOrAfterRequirementDate)
    } else {
        verdict(Rule::AmendedBeforeRequirementDate)
    }
}

fn choose_period(walk: &mut Walk<'_>, registry: &dyn CompanyRegistry) -> Result<Period, Halt> {
    if !walk.ask_bool(QuestionKind::UseAutomaticLookup)? {
        let start = walk.ask_date(QuestionKind::PeriodStart)?;
        let end = walk.ask_date(QuestionKind::PeriodEnd)?;
        return Ok(Period::new(start, end)?);
    }

    let kind = QuestionKind::CompanyNumber;
    let raw = walk
        .ask(kind, QuestionConfig::text_with_pattern(COMPANY_NUMBER_PATTERN))?
        .as_text(kind.id())?;
    let number = CompanyNumber::parse(raw)?;
    let profile = registry.fetch_company_profile(&number)?;
    let options = profile.accounting_periods(PERIOD_OPTIONS)?;

    let kind = QuestionKind::ChoosePeriod;
    Ok(walk
        .ask(kind, QuestionConfig::PeriodSelect { options })?
        .as_period(kind.id())?)
}
