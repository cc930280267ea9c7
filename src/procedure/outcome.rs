//! Terminal outcomes
//!
//! Every verdict names the rule that fired. The reason text is owned by
//! the rule so each terminal path keeps a distinct justification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The rule that terminated a walk with a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Period started before 1 April 2023
    PeriodBeforeRequirementDate,
    /// Claim submitted on or before the notification deadline
    SubmittedWithinNotificationPeriod,
    /// Company has never claimed before
    FirstClaim,
    /// Most recent claim is more than 3 years before the deadline
    RecentClaimOutOfWindow,
    /// A previous claim was rejected by HMRC
    PreviousClaimRejected,
    /// No pre-regime claim was amended on or after 1 April 2023
    NoPreRegimeAmendment,
    /// Amendment covered by the HMRC guidance-error exception
    GuidanceErrorException,
    /// Pre-regime claim amended on or after 1 April 2023
    AmendedOnOrAfterRequirementDate,
    /// Pre-regime claim amended before 1 April 2023
    AmendedBeforeRequirementDate,
}

impl Rule {
    pub fn cnf_required(&self) -> bool {
        match self {
            Rule::FirstClaim
            | Rule::RecentClaimOutOfWindow
            | Rule::PreviousClaimRejected
            | Rule::AmendedOnOrAfterRequirementDate => true,
            Rule::PeriodBeforeRequirementDate
            | Rule::SubmittedWithinNotificationPeriod
            | Rule::NoPreRegimeAmendment
            | Rule::GuidanceErrorException
            | Rule::AmendedBeforeRequirementDate => false,
        }
    }

    /// Human-readable justification
    pub fn reason(&self) -> &'static str {
        match self {
            Rule::PeriodBeforeRequirementDate => {
                "Claims for periods beginning before 1 April 2023 do not require a CNF to be submitted."
            }
            Rule::SubmittedWithinNotificationPeriod => {
                "No CNF is required because the claim was submitted within the notification period (6 months after the accounting period end)."
            }
            Rule::FirstClaim => {
                "A CNF is required because this is the company's first R&D tax relief claim."
            }
            Rule::RecentClaimOutOfWindow => {
                "A CNF is required because the most recent claim was submitted more than 3 years before the notification period deadline."
            }
            Rule::PreviousClaimRejected => {
                "A CNF is required because a previous R&D claim was rejected by HMRC."
            }
            Rule::NoPreRegimeAmendment => {
                "No CNF is required because there was a recent claim within 3 years, no rejections, and no amendments for periods before 1 April 2023 made on or after 1 April 2023."
            }
            Rule::GuidanceErrorException => {
                "No CNF is required because HMRC guidance wrongly stated that amending a claim for a period before 1 April 2023 counted as a previous claim; amendments made between 1 April 2023 and 30 November 2024 are accepted for notification deadlines between 8 September 2024 and 30 November 2024."
            }
            Rule::AmendedOnOrAfterRequirementDate => {
                "A CNF is required because an R&D claim for a period before 1 April 2023 was amended on or after 1 April 2023."
            }
            Rule::AmendedBeforeRequirementDate => {
                "No CNF is required because the amendment to a claim for a period before 1 April 2023 was made before 1 April 2023."
            }
        }
    }
}

/// Terminal result of a walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        cnf_required: bool,
        /// Present only when a CNF is required
        deadline: Option<NaiveDate>,
        rule: Rule,
        reason: String,
    },
    Error {
        message: String,
    },
}

impl Outcome {
    /// Verdict for `rule`; the deadline is kept only when a CNF is required.
    pub fn verdict(rule: Rule, deadline: Option<NaiveDate>) -> Self {
        let cnf_required = rule.cnf_required();
        Outcome::Success {
            cnf_required,
            deadline: deadline.filter(|_| cnf_required),
            rule,
            reason: rule.reason().to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Outcome::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// `None` for error outcomes
    pub fn cnf_required(&self) -> Option<bool> {
        match self {
            Outcome::Success { cnf_required, .. } => Some(*cnf_required),
            Outcome::Error { .. } => None,
        }
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        match self {
            Outcome::Success { deadline, .. } => *deadline,
            Outcome::Error { .. } => None,
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            Outcome::Success { rule, .. } => Some(*rule),
            Outcome::Error { .. } => None,
        }
    }
}
