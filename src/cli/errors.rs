//! CLI-specific error types
//!
//! These end the process. Per-request failures inside a session are
//! reported on stdout instead and the session keeps running.

use std::fmt;
use std::io;

use crate::registry::RegistryError;
use crate::timeline::TimelineError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Request JSON did not match the expected shape
    InvalidRequest,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CNF_CLI_CONFIG_ERROR",
            Self::IoError => "CNF_CLI_IO_ERROR",
            Self::InvalidRequest => "CNF_CLI_INVALID_REQUEST",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidRequest, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::io_error(format!("JSON error: {}", e))
        } else {
            Self::invalid_request(format!("JSON error: {}", e))
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        Self::config_error(format!("Registry config error: {}", e))
    }
}

impl From<TimelineError> for CliError {
    fn from(e: TimelineError) -> Self {
        Self::invalid_request(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
