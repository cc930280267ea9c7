//! Registry lookup implementations

use std::collections::BTreeMap;
use std::fmt;

use super::errors::{RegistryError, RegistryResult};
use super::profile::{CompanyNumber, CompanyProfile};
use crate::observability::{log_event_with_fields, Event};

/// Resolves company numbers into profiles.
///
/// Implementations must be idempotent for a given company number; the
/// session replays lookups on every navigation step.
pub trait CompanyRegistry: Send + Sync + fmt::Debug {
    /// Fetch the profile for a validated company number.
    fn fetch_company_profile(&self, number: &CompanyNumber) -> RegistryResult<CompanyProfile>;
}

impl<R: CompanyRegistry + ?Sized> CompanyRegistry for Box<R> {
    fn fetch_company_profile(&self, number: &CompanyNumber) -> RegistryResult<CompanyProfile> {
        (**self).fetch_company_profile(number)
    }
}

/// Profiles held in memory, keyed by company number.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    companies: BTreeMap<String, CompanyProfile>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a map of company number to profile.
    pub fn from_profiles(companies: BTreeMap<String, CompanyProfile>) -> Self {
        Self { companies }
    }

    /// Register a profile under its own company number.
    pub fn insert(&mut self, profile: CompanyProfile) {
        self.companies.insert(profile.company_number.clone(), profile);
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

impl CompanyRegistry for InMemoryRegistry {
    fn fetch_company_profile(&self, number: &CompanyNumber) -> RegistryResult<CompanyProfile> {
        let profile = self
            .companies
            .get(number.as_str())
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(number.to_string()))?;
        profile.validate()?;

        log_event_with_fields(
            Event::RegistryLookup,
            &[("company_number", number.as_str())],
        );
        Ok(profile)
    }
}

/// Answers with a placeholder profile whenever the inner registry fails.
///
/// The placeholder is treated as real data by the decision procedure.
#[derive(Debug, Clone)]
pub struct FallbackRegistry<R> {
    inner: R,
    placeholder: CompanyProfile,
}

impl<R: CompanyRegistry> FallbackRegistry<R> {
    pub fn new(inner: R, placeholder: CompanyProfile) -> Self {
        Self { inner, placeholder }
    }

    pub fn placeholder(&self) -> &CompanyProfile {
        &self.placeholder
    }
}

impl<R: CompanyRegistry> CompanyRegistry for FallbackRegistry<R> {
    fn fetch_company_profile(&self, number: &CompanyNumber) -> RegistryResult<CompanyProfile> {
        match self.inner.fetch_company_profile(number) {
            Ok(profile) => Ok(profile),
            Err(e) => {
                let message = e.to_string();
                log_event_with_fields(
                    Event::RegistryFallback,
                    &[
                        ("code", e.code()),
                        ("company_number", number.as_str()),
                        ("error", message.as_str()),
                    ],
                );
                Ok(self.placeholder.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::parse_date;

    #[derive(Debug)]
    struct Offline;

    impl CompanyRegistry for Offline {
        fn fetch_company_profile(&self, _: &CompanyNumber) -> RegistryResult<CompanyProfile> {
            Err(RegistryError::Unavailable("connection refused".to_string()))
        }
    }

    fn june_profile() -> CompanyProfile {
        CompanyProfile {
            company_number: "AB123456".to_string(),
            company_name: Some("Widgets Ltd".to_string()),
            accounting_reference_day: 30,
            accounting_reference_month: 6,
            last_period_end: parse_date("2024-06-30").unwrap(),
        }
    }

    fn number(s: &str) -> CompanyNumber {
        CompanyNumber::parse(s).unwrap()
    }

    #[test]
    fn test_in_memory_hit_and_miss() {
        let mut registry = InMemoryRegistry::new();
        registry.insert(june_profile());
        assert_eq!(registry.len(), 1);

        let found = registry.fetch_company_profile(&number("AB123456")).unwrap();
        assert_eq!(found.company_name.as_deref(), Some("Widgets Ltd"));

        let missing = registry.fetch_company_profile(&number("ZZ999999"));
        assert_eq!(missing, Err(RegistryError::NotFound("ZZ999999".to_string())));
    }

    #[test]
    fn test_in_memory_rejects_corrupt_profile() {
        let mut bad = june_profile();
        bad.accounting_reference_month = 0;
        let registry = InMemoryRegistry::from_profiles(
            [("AB123456".to_string(), bad)].into_iter().collect(),
        );
        assert!(matches!(
            registry.fetch_company_profile(&number("AB123456")),
            Err(RegistryError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_fallback_answers_placeholder_on_failure() {
        let registry = FallbackRegistry::new(Offline, CompanyProfile::placeholder());
        let profile = registry.fetch_company_profile(&number("AB123456")).unwrap();
        assert_eq!(profile, CompanyProfile::placeholder());
    }

    #[test]
    fn test_fallback_passes_through_success() {
        let mut inner = InMemoryRegistry::new();
        inner.insert(june_profile());
        let registry = FallbackRegistry::new(inner, CompanyProfile::placeholder());
        let profile = registry.fetch_company_profile(&number("AB123456")).unwrap();
        assert_eq!(profile, june_profile());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut registry = InMemoryRegistry::new();
        registry.insert(june_profile());
        let first = registry.fetch_company_profile(&number("AB123456"));
        let second = registry.fetch_company_profile(&number("AB123456"));
        assert_eq!(first, second);
    }
}
