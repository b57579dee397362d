//! Deployment naming configuration and validation.
//!
//! The resolver and sweeper look for files by fixed names. Those names are
//! collected here so hosts can rename them without touching detection logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default file name of the native launcher under `<runtime>/bin`.
pub const DEFAULT_LAUNCHER_NAME: &str = "javaw.exe";

/// Default file name of the packaged wrapper executable.
pub const DEFAULT_PACKAGED_EXECUTABLE_NAME: &str = "Chatty.exe";

/// Default extension of the application archive.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = "jar";

/// Default prefix of installer artifacts written to the scratch directory.
pub const DEFAULT_INSTALLER_PREFIX: &str = "Chatty_";

/// Default extension of scratch files and installer artifacts.
pub const DEFAULT_INSTALLER_EXTENSION: &str = "exe";

/// Default number of days a stale installer is kept before sweeping.
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// Errors from loading or validating a [`DeploymentConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{field} must be a bare file name, got {value:?}")]
    NotAFileName { field: &'static str, value: String },

    #[error("{field} must not start with a dot, got {value:?}")]
    LeadingDot { field: &'static str, value: String },

    #[error("Retention must be at least one day, got {0}")]
    InvalidRetention(u32),

    #[error("Failed to read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Names and retention policy used during detection and sweeping.
///
/// Missing fields take their defaults when deserializing, so a config file
/// only needs to list what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Native launcher file name, looked up under `<runtime>/bin`.
    pub launcher_name: String,

    /// Packaged wrapper executable file name.
    pub packaged_executable_name: String,

    /// Archive extension without the leading dot.
    pub archive_extension: String,

    /// Prefix every sweepable installer artifact starts with.
    pub installer_prefix: String,

    /// Extension of generated scratch files, without the leading dot.
    pub installer_extension: String,

    /// Installers older than this many days are swept.
    pub retention_days: u32,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            launcher_name: DEFAULT_LAUNCHER_NAME.to_string(),
            packaged_executable_name: DEFAULT_PACKAGED_EXECUTABLE_NAME.to_string(),
            archive_extension: DEFAULT_ARCHIVE_EXTENSION.to_string(),
            installer_prefix: DEFAULT_INSTALLER_PREFIX.to_string(),
            installer_extension: DEFAULT_INSTALLER_EXTENSION.to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl DeploymentConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Retention window as a chrono duration.
    pub fn retention(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.retention_days))
    }
}

/// Validate a config before it is handed to a [`crate::DeploymentContext`].
pub fn validate_config(config: &DeploymentConfig) -> Result<(), ConfigError> {
    check_file_name("launcher_name", &config.launcher_name)?;
    check_file_name("packaged_executable_name", &config.packaged_executable_name)?;
    check_file_name("installer_prefix", &config.installer_prefix)?;
    check_extension("archive_extension", &config.archive_extension)?;
    check_extension("installer_extension", &config.installer_extension)?;

    if config.retention_days == 0 {
        return Err(ConfigError::InvalidRetention(config.retention_days));
    }

    Ok(())
}

fn check_file_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(ConfigError::NotAFileName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_extension(field: &'static str, value: &str) -> Result<(), ConfigError> {
    check_file_name(field, value)?;
    if value.starts_with('.') {
        return Err(ConfigError::LeadingDot {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
