//! Accounting periods and timeline summaries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{is_cnf_required_by_start_date, notification_deadline, CNF_REQUIREMENT_DATE};
use super::errors::{TimelineError, TimelineResult};

/// One accounting period. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Create a period, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> TimelineResult<Self> {
        if start > end {
            return Err(TimelineError::InvertedPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Re-check the ordering invariant on a deserialized period.
    pub fn validate(&self) -> TimelineResult<()> {
        Self::new(self.start, self.end).map(|_| ())
    }

    /// Notification deadline for this period.
    pub fn deadline(&self) -> TimelineResult<NaiveDate> {
        notification_deadline(self.end)
    }
}

/// The window between period end and the notification deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Key dates for one claim period, as shown alongside the questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineInfo {
    pub accounting_period: Period,
    pub notification_period: NotificationPeriod,
    pub cnf_requirement_date: NaiveDate,
    pub is_cnf_required_by_start_date: bool,
}

impl TimelineInfo {
    pub fn for_period(period: &Period) -> TimelineResult<Self> {
        period.validate()?;
        Ok(Self {
            accounting_period: *period,
            notification_period: NotificationPeriod {
                start: period.end,
                end: period.deadline()?,
            },
            cnf_requirement_date: CNF_REQUIREMENT_DATE,
            is_cnf_required_by_start_date: is_cnf_required_by_start_date(period.start),
        })
    }
}
