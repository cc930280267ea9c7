//! Configuration file
//!
//! ```json
//! {
//!   "log_level": "warn",
//!   "registry": {
//!     "fallback_to_placeholder": true,
//!     "companies": { "AB123456": { ... } }
//!   }
//! }
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::registry::RegistryConfig;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// trace | info | warn | error | off (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Company registry collaborator (optional, defaults to placeholder fallback)
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            registry: RegistryConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or fall back to defaults when none is given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.min_severity()?;
        self.registry.validate()?;
        Ok(())
    }

    /// Parsed `log_level`; `None` means logging is off
    pub fn min_severity(&self) -> CliResult<Option<Severity>> {
        if self.log_level.eq_ignore_ascii_case("off") {
            return Ok(None);
        }
        self.log_level
            .parse::<Severity>()
            .map(Some)
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Apply the logging settings to the process-wide logger
    pub fn apply_logging(&self) -> CliResult<()> {
        Logger::set_min_severity(self.min_severity()?);
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("companies", &self.registry.companies.len().to_string()),
                ("log_level", &self.log_level),
            ],
        );
        Ok(())
    }
}
