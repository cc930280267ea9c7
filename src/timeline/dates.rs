//! Date arithmetic
//!
//! Month arithmetic clamps to the last valid day of the target month,
//! so 31 March + 6 months is 30 September, never 1 October.

use chrono::{Months, NaiveDate};

use super::errors::{TimelineError, TimelineResult};

/// Periods starting before this date never need a CNF.
pub const CNF_REQUIREMENT_DATE: NaiveDate = ymd(2023, 4, 1);

/// First deadline covered by the guidance-error exception.
pub const GUIDANCE_WINDOW_START: NaiveDate = ymd(2024, 9, 8);

/// Last deadline (and last amendment date) covered by the guidance-error exception.
pub const GUIDANCE_WINDOW_END: NaiveDate = ymd(2024, 11, 30);

/// Months between period end and the notification deadline.
pub const NOTIFICATION_MONTHS: u32 = 6;

/// A prior claim counts as recent within this many months before the deadline.
pub const RECENT_CLAIM_MONTHS: u32 = 36;

pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar constant"),
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| TimelineError::InvalidDate(input.to_string()))
}

/// Add calendar months, clamping the day to the target month.
pub fn add_months(date: NaiveDate, months: u32) -> TimelineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| TimelineError::OutOfRange(format!("{} + {} months", date, months)))
}

/// Subtract calendar months, clamping the day to the target month.
pub fn sub_months(date: NaiveDate, months: u32) -> TimelineResult<NaiveDate> {
    date.checked_sub_months(Months::new(months))
        .ok_or_else(|| TimelineError::OutOfRange(format!("{} - {} months", date, months)))
}

/// Notification deadline for a period ending on `period_end`.
pub fn notification_deadline(period_end: NaiveDate) -> TimelineResult<NaiveDate> {
    add_months(period_end, NOTIFICATION_MONTHS)
}

/// True when a period starting on `start` falls under the CNF regime.
pub fn is_cnf_required_by_start_date(start: NaiveDate) -> bool {
    start >= CNF_REQUIREMENT_DATE
}

/// Deadline falls inside 8 Sep 2024 ..= 30 Nov 2024.
pub fn deadline_in_guidance_window(deadline: NaiveDate) -> bool {
    (GUIDANCE_WINDOW_START..=GUIDANCE_WINDOW_END).contains(&deadline)
}

/// Amendment falls inside 1 Apr 2023 ..= 30 Nov 2024.
pub fn amendment_in_guidance_window(amended_on: NaiveDate) -> bool {
    (CNF_REQUIREMENT_DATE..=GUIDANCE_WINDOW_END).contains(&amended_on)
}
