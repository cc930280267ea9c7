//! Questions
//!
//! Each position in the decision tree is a `QuestionKind` with a stable
//! id. A `Question` is one emitted suspension point: immutable, carrying
//! the input shape a presenter must collect.

use serde::{Deserialize, Serialize};

use crate::timeline::Period;

/// Stable identifier of a decision-tree position
pub type QuestionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    UseAutomaticLookup,
    CompanyNumber,
    ChoosePeriod,
    PeriodStart,
    PeriodEnd,
    SubmissionDate,
    HasClaimedBefore,
    RecentClaimDate,
    ClaimRejected,
    AmendedPreRegimeClaim,
    AmendmentDate,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 11] = [
        QuestionKind::UseAutomaticLookup,
        QuestionKind::CompanyNumber,
        QuestionKind::ChoosePeriod,
        QuestionKind::PeriodStart,
        QuestionKind::PeriodEnd,
        QuestionKind::SubmissionDate,
        QuestionKind::HasClaimedBefore,
        QuestionKind::RecentClaimDate,
        QuestionKind::ClaimRejected,
        QuestionKind::AmendedPreRegimeClaim,
        QuestionKind::AmendmentDate,
    ];

    pub fn id(&self) -> QuestionId {
        match self {
            QuestionKind::UseAutomaticLookup => 1,
            QuestionKind::CompanyNumber => 2,
            QuestionKind::ChoosePeriod => 3,
            QuestionKind::PeriodStart => 4,
            QuestionKind::PeriodEnd => 5,
            QuestionKind::SubmissionDate => 6,
            QuestionKind::HasClaimedBefore => 7,
            QuestionKind::RecentClaimDate => 8,
            QuestionKind::ClaimRejected => 9,
            QuestionKind::AmendedPreRegimeClaim => 10,
            QuestionKind::AmendmentDate => 11,
        }
    }

    pub fn from_id(id: QuestionId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::UseAutomaticLookup => {
                "Look up your accounting periods from Companies House?"
            }
            QuestionKind::CompanyNumber => "Enter your company number",
            QuestionKind::ChoosePeriod => "Choose a period",
            QuestionKind::PeriodStart => "Accounting period start date",
            QuestionKind::PeriodEnd => "Accounting period end date",
            QuestionKind::SubmissionDate => "Claim submission date",
            QuestionKind::HasClaimedBefore => "Has this company claimed R&D tax relief before?",
            QuestionKind::RecentClaimDate => "When was the most recent R&D claim submitted?",
            QuestionKind::ClaimRejected => "Was any previous R&D claim rejected by HMRC?",
            QuestionKind::AmendedPreRegimeClaim => {
                "Have you amended any R&D claim for a period before 1 April 2023 on or after 1 April 2023?"
            }
            QuestionKind::AmendmentDate => "When was the amendment submitted?",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            QuestionKind::UseAutomaticLookup => {
                "Answer no to enter the accounting period dates yourself."
            }
            QuestionKind::CompanyNumber => {
                "We use your company number to get previous accounting periods from Companies House."
            }
            QuestionKind::ChoosePeriod => {
                "Claim periods beginning before 1 April 2023 don't require a CNF."
            }
            QuestionKind::PeriodStart => {
                "Claim periods beginning before 1 April 2023 don't require a CNF."
            }
            QuestionKind::PeriodEnd => {
                "The notification deadline is 6 months after the accounting period end."
            }
            QuestionKind::SubmissionDate => {
                "Claims submitted within 6 months of the accounting period end don't require a CNF."
            }
            QuestionKind::HasClaimedBefore => {
                "First-time claimants are always required to submit a CNF."
            }
            QuestionKind::RecentClaimDate => {
                "If your most recent claim was more than 3 years before the notification deadline, a CNF is required."
            }
            QuestionKind::ClaimRejected => {
                "Companies with previously rejected claims must submit a CNF for all future claims."
            }
            QuestionKind::AmendedPreRegimeClaim => {
                "Amendments to pre-2023 claims made after 1 April 2023 trigger CNF requirements for future claims."
            }
            QuestionKind::AmendmentDate => {
                "The timing of the amendment determines whether a CNF is required for this claim."
            }
        }
    }
}

/// The answer shape a question expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionConfig {
    Text {
        /// Validation hint for presenters; the engine does not enforce it
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    PeriodSelect {
        options: Vec<Period>,
    },
    Date,
    Boolean,
}

impl QuestionConfig {
    pub fn text_with_pattern(pattern: &str) -> Self {
        QuestionConfig::Text {
            pattern: Some(pattern.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub label: String,
    pub hint: String,
    pub config: QuestionConfig,
    /// 1-based position of this question in the current walk
    pub sequence_number: u32,
}

impl Question {
    pub fn new(kind: QuestionKind, config: QuestionConfig, sequence_number: u32) -> Self {
        Self {
            id: kind.id(),
            label: kind.label().to_string(),
            hint: kind.hint().to_string(),
            config,
            sequence_number,
        }
    }

    pub fn kind(&self) -> Option<QuestionKind> {
        QuestionKind::from_id(self.id)
    }
}
