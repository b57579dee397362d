//! Process-backed implementation of [`DeploymentProbe`].

use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::ports::{DeploymentProbe, ProbeError, ProbeResult};

/// Default implementation of `DeploymentProbe`.
///
/// Assumes the bundled-runtime layout where the process image is
/// `<runtime>/bin/<executable>`, so the runtime home is two levels above the
/// running executable. It should be constructed in the host's startup code
/// and handed to [`crate::DeploymentContext::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDeploymentProbe;

impl DefaultDeploymentProbe {
    /// Create a new default probe.
    pub const fn new() -> Self {
        Self
    }
}

fn current_exe() -> ProbeResult<PathBuf> {
    env::current_exe().map_err(|e| ProbeError::NoExecutable(e.to_string()))
}

impl DeploymentProbe for DefaultDeploymentProbe {
    fn runtime_home(&self) -> ProbeResult<PathBuf> {
        let exe = current_exe()?;
        let home = exe.parent().and_then(Path::parent).map(Path::to_path_buf);
        home.ok_or(ProbeError::NoParent(exe))
    }

    fn loaded_code_location(&self) -> ProbeResult<PathBuf> {
        current_exe()
    }

    fn temp_dir(&self) -> ProbeResult<PathBuf> {
        let dir = env::temp_dir();
        if dir.as_os_str().is_empty() {
            return Err(ProbeError::NoTempDir);
        }
        Ok(dir)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
