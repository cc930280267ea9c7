//! Shared fixtures for integration tests

#![allow(dead_code)]

use cnf_checker::procedure::{Answer, Outcome, Step};
use cnf_checker::registry::{
    CompanyNumber, CompanyProfile, CompanyRegistry, InMemoryRegistry, RegistryError,
    RegistryResult,
};
use cnf_checker::timeline::parse_date;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Registry with one March year-end company, `AB123456`.
pub fn march_registry() -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();
    registry.insert(CompanyProfile {
        company_number: "AB123456".to_string(),
        company_name: Some("Widgets Ltd".to_string()),
        accounting_reference_day: 31,
        accounting_reference_month: 3,
        last_period_end: parse_date("2025-03-31").unwrap(),
    });
    registry
}

/// Counts lookups and always fails.
#[derive(Debug, Default)]
pub struct CountingOffline {
    pub calls: AtomicUsize,
}

impl CompanyRegistry for CountingOffline {
    fn fetch_company_profile(&self, _: &CompanyNumber) -> RegistryResult<CompanyProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RegistryError::Unavailable("offline".to_string()))
    }
}

pub fn a<T: Into<Answer>>(value: T) -> Answer {
    value.into()
}

/// Manual-entry answers for a period.
pub fn manual(start: &str, end: &str) -> Vec<Answer> {
    vec![a(false), a(start), a(end)]
}

pub fn expect_outcome(step: Step) -> Outcome {
    match step {
        Step::Complete(outcome) => outcome,
        Step::Question(q) => panic!("expected an outcome, got question {}", q.id),
    }
}
