//! Decision procedure
//!
//! The CNF eligibility rules as a pure step function:
//!
//! ```text
//! advance(answers, registry) -> Step::Question | Step::Complete(Outcome)
//! ```
//!
//! There is no suspended state. Every call walks the decision tree from
//! the first question, consuming one answer per question asked, and
//! stops at the first question without an answer or at a terminal rule.
//! The result depends only on the answer list and on the registry
//! lookup, which makes replay-based navigation correct by construction.

mod answer;
mod decision;
mod errors;
mod outcome;
mod question;

pub use answer::Answer;
pub use decision::{advance, evaluate, Evaluation, Step, PERIOD_OPTIONS};
pub use errors::{AnswerError, AnswerResult};
pub use outcome::{Outcome, Rule};
pub use question::{Question, QuestionConfig, QuestionId, QuestionKind};
