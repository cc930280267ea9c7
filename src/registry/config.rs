//! Registry configuration
//!
//! Passed in at construction time; nothing is read from the environment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{RegistryError, RegistryResult};
use super::lookup::{CompanyRegistry, FallbackRegistry, InMemoryRegistry};
use super::profile::{CompanyNumber, CompanyProfile};

fn default_fallback() -> bool {
    true
}

/// How the company registry collaborator is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Known companies keyed by company number (optional, default empty)
    #[serde(default)]
    pub companies: BTreeMap<String, CompanyProfile>,

    /// Answer with `placeholder` when a lookup fails (optional, default true)
    #[serde(default = "default_fallback")]
    pub fallback_to_placeholder: bool,

    /// Profile used by the fallback (optional, default "Example Company Ltd")
    #[serde(default = "CompanyProfile::placeholder")]
    pub placeholder: CompanyProfile,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            companies: BTreeMap::new(),
            fallback_to_placeholder: default_fallback(),
            placeholder: CompanyProfile::placeholder(),
        }
    }
}

impl RegistryConfig {
    /// Check every configured company number and profile.
    pub fn validate(&self) -> RegistryResult<()> {
        for (key, profile) in &self.companies {
            CompanyNumber::parse(key)?;
            if key != &profile.company_number {
                return Err(RegistryError::InvalidProfile(format!(
                    "profile listed under {} has company_number {}",
                    key, profile.company_number
                )));
            }
            profile.validate()?;
        }
        self.placeholder.validate()
    }

    /// Assemble the registry described by this config.
    pub fn build(&self) -> Box<dyn CompanyRegistry> {
        let registry = InMemoryRegistry::from_profiles(self.companies.clone());
        if self.fallback_to_placeholder {
            Box::new(FallbackRegistry::new(registry, self.placeholder.clone()))
        } else {
            Box::new(registry)
        }
    }
}
