//! Timeline helpers
//!
//! Calendar arithmetic shared by the decision procedure and the CLI:
//! - Accounting periods
//! - Notification deadlines (period end + 6 months)
//! - The 1 April 2023 requirement date and the guidance-error window
//!
//! All dates are `chrono::NaiveDate`; no time zones are involved.

mod dates;
mod errors;
mod period;

pub use dates::{
    add_months, amendment_in_guidance_window, deadline_in_guidance_window,
    is_cnf_required_by_start_date, notification_deadline, parse_date, sub_months,
    CNF_REQUIREMENT_DATE, GUIDANCE_WINDOW_END, GUIDANCE_WINDOW_START, NOTIFICATION_MONTHS,
    RECENT_CLAIM_MONTHS,
};
pub(crate) use dates::ymd;
pub use errors::{TimelineError, TimelineResult};
pub use period::{NotificationPeriod, Period, TimelineInfo};
