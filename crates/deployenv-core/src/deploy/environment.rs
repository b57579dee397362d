//! Resolved deployment environment snapshot.
//!
//! [`DeploymentEnvironment::detect`] performs one full pass over the probe
//! and the filesystem. The resulting value is immutable; a later pass
//! produces a new value rather than updating this one.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::checks::{is_archive_file, is_writable_dir};
use crate::config::DeploymentConfig;
use crate::ports::DeploymentProbe;

/// How the application is deployed, derived from which executables exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentShape {
    /// Running directly from the archive, no packaged executable.
    ArchiveOnly,
    /// Packaged executable present, no native launcher in the runtime.
    Standalone,
    /// Packaged executable and native launcher both present.
    StandaloneWithLauncher,
}

impl fmt::Display for DeploymentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ArchiveOnly => "archive-only",
            Self::Standalone => "standalone",
            Self::StandaloneWithLauncher => "standalone-with-launcher",
        };
        f.write_str(label)
    }
}

/// Everything known about the current deployment.
///
/// Each path is `Some` only if it passed its checks at detection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentEnvironment {
    runtime_root: Option<PathBuf>,
    native_launcher: Option<PathBuf>,
    packaged_executable: Option<PathBuf>,
    packaged_executable_dir: Option<PathBuf>,
    archive_path: Option<PathBuf>,
    archive_dir: Option<PathBuf>,
    scratch_dir: Option<PathBuf>,
}

impl DeploymentEnvironment {
    /// Detect the environment from the probe and the filesystem.
    ///
    /// Never fails: a step that cannot complete leaves its field empty and
    /// the remaining steps still run. `archive_hint` takes precedence over
    /// the probe's loaded-code location; both go through the same checks.
    pub fn detect(
        probe: &dyn DeploymentProbe,
        config: &DeploymentConfig,
        archive_hint: Option<&Path>,
    ) -> Self {
        let runtime_root = match probe.runtime_home() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Cannot determine runtime root: {e}");
                None
            }
        };

        let native_launcher = runtime_root
            .as_deref()
            .map(|root| root.join("bin").join(&config.launcher_name))
            .filter(|candidate| candidate.exists());

        let archive_path = detect_archive(probe, config, archive_hint);
        let archive_dir = archive_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        let packaged_executable = archive_dir.as_deref().and_then(|dir| {
            locate_packaged_executable(runtime_root.as_deref(), dir, config)
        });
        let packaged_executable_dir = packaged_executable
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        let scratch_dir = detect_scratch_dir(probe);

        let env = Self {
            runtime_root,
            native_launcher,
            packaged_executable,
            packaged_executable_dir,
            archive_path,
            archive_dir,
            scratch_dir,
        };
        info!(
            "Deployment environment: runtime: {} / launcher: {} / archive: {} / executable: {} / scratch: {}",
            display_opt(env.runtime_root.as_deref()),
            if env.native_launcher.is_some() { "yes" } else { "no" },
            display_opt(env.archive_path.as_deref()),
            display_opt(env.packaged_executable.as_deref()),
            display_opt(env.scratch_dir.as_deref()),
        );
        env
    }

    pub fn runtime_root(&self) -> Option<&Path> {
        self.runtime_root.as_deref()
    }

    pub fn native_launcher(&self) -> Option<&Path> {
        self.native_launcher.as_deref()
    }

    pub fn packaged_executable(&self) -> Option<&Path> {
        self.packaged_executable.as_deref()
    }

    pub fn packaged_executable_dir(&self) -> Option<&Path> {
        self.packaged_executable_dir.as_deref()
    }

    pub fn archive_path(&self) -> Option<&Path> {
        self.archive_path.as_deref()
    }

    pub fn archive_dir(&self) -> Option<&Path> {
        self.archive_dir.as_deref()
    }

    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch_dir.as_deref()
    }

    /// Packaged executable present and no native launcher.
    pub const fn is_standalone_deployment(&self) -> bool {
        self.packaged_executable.is_some() && self.native_launcher.is_none()
    }

    /// An installer can be downloaded and pointed at the archive directory.
    pub const fn install_action_available(&self) -> bool {
        self.archive_dir.is_some() && self.scratch_dir.is_some()
    }

    /// Directory an installer should target.
    ///
    /// Standalone installers replace the packaged executable's directory;
    /// all others install next to the archive.
    pub fn install_target_dir(&self, prefer_standalone: bool) -> Option<&Path> {
        if prefer_standalone {
            self.packaged_executable_dir()
        } else {
            self.archive_dir()
        }
    }

    pub fn shape(&self) -> DeploymentShape {
        match (&self.packaged_executable, &self.native_launcher) {
            (None, _) => DeploymentShape::ArchiveOnly,
            (Some(_), None) => DeploymentShape::Standalone,
            (Some(_), Some(_)) => DeploymentShape::StandaloneWithLauncher,
        }
    }
}

fn detect_archive(
    probe: &dyn DeploymentProbe,
    config: &DeploymentConfig,
    archive_hint: Option<&Path>,
) -> Option<PathBuf> {
    let candidate = match archive_hint {
        Some(hint) => hint.to_path_buf(),
        None => match probe.loaded_code_location() {
            Ok(path) => path,
            Err(e) => {
                warn!("Cannot determine archive location: {e}");
                return None;
            }
        },
    };

    if is_archive_file(&candidate, &config.archive_extension) {
        Some(candidate)
    } else {
        debug!(
            "Ignoring archive candidate {}: not an existing .{} file",
            candidate.display(),
            config.archive_extension
        );
        None
    }
}

/// Accept the packaged executable only when the runtime-relative and the
/// archive-relative routes name the identical path and that path exists.
///
/// Paths are compared component-wise without canonicalisation, so a route
/// through a symlink counts as a different path.
fn locate_packaged_executable(
    runtime_root: Option<&Path>,
    archive_dir: &Path,
    config: &DeploymentConfig,
) -> Option<PathBuf> {
    let from_runtime = runtime_root?
        .parent()?
        .join(&config.packaged_executable_name);
    let from_archive = archive_dir.parent()?.join(&config.packaged_executable_name);

    if from_runtime.exists() && from_runtime == from_archive {
        Some(from_runtime)
    } else {
        debug!(
            "No packaged executable: {} / {}",
            from_runtime.display(),
            from_archive.display()
        );
        None
    }
}

fn detect_scratch_dir(probe: &dyn DeploymentProbe) -> Option<PathBuf> {
    match probe.temp_dir() {
        Ok(dir) if is_writable_dir(&dir) => Some(dir),
        Ok(dir) => {
            warn!("Temp directory {} is missing or not writable", dir.display());
            None
        }
        Err(e) => {
            warn!("Cannot determine temp directory: {e}");
            None
        }
    }
}

fn display_opt(path: Option<&Path>) -> String {
    path.map_or_else(|| "none".to_string(), |p| p.display().to_string())
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "runtime_root = {}", display_opt(self.runtime_root()))?;
        writeln!(f, "native_launcher = {}", display_opt(self.native_launcher()))?;
        writeln!(
            f,
            "packaged_executable = {}",
            display_opt(self.packaged_executable())
        )?;
        writeln!(f, "archive_path = {}", display_opt(self.archive_path()))?;
        writeln!(f, "scratch_dir = {}", display_opt(self.scratch_dir()))?;
        write!(f, "shape = {}", self.shape())
    }
}
