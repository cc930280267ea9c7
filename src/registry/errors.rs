//! Registry error types

use thiserror::Error;

/// Result type for registry lookups
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Company registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid company number: {0}")]
    InvalidCompanyNumber(String),

    #[error("Company number {0} not found")]
    NotFound(String),

    #[error("Company registry unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid company profile: {0}")]
    InvalidProfile(String),
}

impl RegistryError {
    /// Stable error code for logs and presenter responses
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidCompanyNumber(_) => "CNF_REGISTRY_INVALID_NUMBER",
            RegistryError::NotFound(_) => "CNF_REGISTRY_NOT_FOUND",
            RegistryError::Unavailable(_) => "CNF_REGISTRY_UNAVAILABLE",
            RegistryError::InvalidProfile(_) => "CNF_REGISTRY_INVALID_PROFILE",
        }
    }
}
