//! Deployment probe port for querying the execution environment.
//!
//! This port abstracts everything the resolver needs to ask the running
//! process: where the runtime is installed, where the running code was
//! loaded from, where temporary files go, and what time it is.
//!
//! # Design Notes
//!
//! - Core owns the trait and error types
//! - `DefaultDeploymentProbe` answers from the live process
//! - Tests inject fixture probes rooted in temporary directories

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur while probing the execution environment.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The running executable could not be determined.
    #[error("Cannot determine running executable: {0}")]
    NoExecutable(String),

    /// A path had no parent where one was required.
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),

    /// The platform reported no usable temporary directory.
    #[error("Cannot determine temporary directory")]
    NoTempDir,
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Port for querying the execution environment.
///
/// None of these methods validate their answers against the filesystem;
/// existence and writability checks belong to the resolver.
///
/// # Example
///
/// ```ignore
/// use deployenv_core::ports::DeploymentProbe;
///
/// fn describe(probe: &dyn DeploymentProbe) {
///     let runtime = probe.runtime_home();
///     let temp = probe.temp_dir();
///     // ...
/// }
/// ```
pub trait DeploymentProbe: Send + Sync {
    /// Installation directory of the runtime executing the application.
    fn runtime_home(&self) -> ProbeResult<PathBuf>;

    /// Location the running code was loaded from.
    ///
    /// Used as the archive candidate when the host supplies no hint.
    fn loaded_code_location(&self) -> ProbeResult<PathBuf>;

    /// System-provided temporary directory.
    fn temp_dir(&self) -> ProbeResult<PathBuf>;

    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}
