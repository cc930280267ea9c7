//! Company numbers and profiles

use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{RegistryError, RegistryResult};
use crate::timeline::{ymd, Period};

/// Validation pattern advertised to presenters for the company number question.
pub const COMPANY_NUMBER_PATTERN: &str = "[0-9A-Z]{8}";

fn company_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^{}$", COMPANY_NUMBER_PATTERN)).expect("static pattern compiles")
    })
}

/// An 8-character upper-case alphanumeric company registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CompanyNumber(String);

impl CompanyNumber {
    /// Parse a company number. No normalisation is applied.
    pub fn parse(input: &str) -> RegistryResult<Self> {
        if company_number_regex().is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(RegistryError::InvalidCompanyNumber(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The registry data the decision procedure needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_number: String,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Day of the accounting reference date (1-31)
    pub accounting_reference_day: u32,
    /// Month of the accounting reference date (1-12)
    pub accounting_reference_month: u32,
    pub last_period_end: NaiveDate,
}

impl CompanyProfile {
    /// Profile answered when a lookup fails and fallback is enabled.
    pub fn placeholder() -> Self {
        Self {
            company_number: "12345678".to_string(),
            company_name: Some("Example Company Ltd".to_string()),
            accounting_reference_day: 31,
            accounting_reference_month: 3,
            last_period_end: ymd(2025, 3, 31),
        }
    }

    pub fn validate(&self) -> RegistryResult<()> {
        if !(1..=12).contains(&self.accounting_reference_month) {
            return Err(RegistryError::InvalidProfile(format!(
                "accounting_reference_month {} out of range",
                self.accounting_reference_month
            )));
        }
        if !(1..=31).contains(&self.accounting_reference_day) {
            return Err(RegistryError::InvalidProfile(format!(
                "accounting_reference_day {} out of range",
                self.accounting_reference_day
            )));
        }
        Ok(())
    }

    /// The reference date falling in `year`, clamped for short months.
    pub fn reference_date(&self, year: i32) -> RegistryResult<NaiveDate> {
        self.validate()?;
        (1..=self.accounting_reference_day)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, self.accounting_reference_month, day))
            .ok_or_else(|| {
                RegistryError::InvalidProfile(format!("no reference date in year {}", year))
            })
    }

    /// The last `count` accounting periods, newest first.
    ///
    /// Each period runs from the day after the previous year's reference
    /// date up to and including this year's reference date, starting
    /// with the year of `last_period_end`.
    pub fn accounting_periods(&self, count: usize) -> RegistryResult<Vec<Period>> {
        let newest = self.last_period_end.year();
        (0..count as i32)
            .map(|offset| {
                let year = newest - offset;
                let end = self.reference_date(year)?;
                let start = self
                    .reference_date(year - 1)?
                    .succ_opt()
                    .ok_or_else(|| RegistryError::InvalidProfile("date overflow".to_string()))?;
                Period::new(start, end)
                    .map_err(|e| RegistryError::InvalidProfile(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::parse_date;

    fn profile(day: u32, month: u32, last_end: &str) -> CompanyProfile {
        CompanyProfile {
            company_number: "AB123456".to_string(),
            company_name: None,
            accounting_reference_day: day,
            accounting_reference_month: month,
            last_period_end: parse_date(last_end).unwrap(),
        }
    }

    #[test]
    fn test_company_number_pattern() {
        assert!(CompanyNumber::parse("12345678").is_ok());
        assert!(CompanyNumber::parse("SC123456").is_ok());
        assert!(CompanyNumber::parse("1234567").is_err());
        assert!(CompanyNumber::parse("123456789").is_err());
        assert!(CompanyNumber::parse("sc123456").is_err());
        assert!(CompanyNumber::parse("SC12345!").is_err());
    }

    #[test]
    fn test_periods_for_march_year_end() {
        let periods = CompanyProfile::placeholder().accounting_periods(3).unwrap();
        let expected = [
            ("2024-04-01", "2025-03-31"),
            ("2023-04-01", "2024-03-31"),
            ("2022-04-01", "2023-03-31"),
        ];
        assert_eq!(periods.len(), 3);
        for (period, (start, end)) in periods.iter().zip(expected) {
            assert_eq!(period.start, parse_date(start).unwrap());
            assert_eq!(period.end, parse_date(end).unwrap());
        }
    }

    #[test]
    fn test_periods_clamp_leap_day_reference() {
        let periods = profile(29, 2, "2024-02-29").accounting_periods(2).unwrap();
        assert_eq!(periods[0].start, parse_date("2023-03-01").unwrap());
        assert_eq!(periods[0].end, parse_date("2024-02-29").unwrap());
        assert_eq!(periods[1].end, parse_date("2023-02-28").unwrap());
    }

    #[test]
    fn test_periods_for_december_year_end() {
        let periods = profile(31, 12, "2024-12-31").accounting_periods(1).unwrap();
        assert_eq!(periods[0].start, parse_date("2024-01-01").unwrap());
        assert_eq!(periods[0].end, parse_date("2024-12-31").unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        let result = profile(31, 13, "2024-12-31").accounting_periods(3);
        assert!(matches!(result, Err(RegistryError::InvalidProfile(_))));
    }

    #[test]
    fn test_profile_json_shape() {
        let json = serde_json::json!({
            "company_number": "AB123456",
            "accounting_reference_day": 30,
            "accounting_reference_month": 6,
            "last_period_end": "2024-06-30"
        });
        let parsed: CompanyProfile = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.company_name, None);
        assert_eq!(parsed.accounting_reference_month, 6);
    }
}
