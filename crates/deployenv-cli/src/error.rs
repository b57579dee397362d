//! CLI-specific error types and exit code mapping.

use deployenv_core::{ConfigError, DeployError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The deployment context refused the operation.
    #[error("{0}")]
    Deploy(#[from] DeployError),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,                                   // EX_CONFIG
            Self::Deploy(DeployError::ScratchDirUnavailable) => 73, // EX_CANTCREAT
            Self::Deploy(DeployError::Uninitialized) => 70,         // EX_SOFTWARE
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
