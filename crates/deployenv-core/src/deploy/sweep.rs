//! Cleanup of stale installer downloads left in the scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, info, warn};

use super::context::DeploymentContext;
use super::error::DeployError;
use crate::config::DeploymentConfig;

/// Outcome of one sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Files that were removed.
    pub deleted: Vec<PathBuf>,
    /// Files that matched but could not be removed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.failed.is_empty()
    }
}

/// Name pattern for installer artifacts, e.g. `Chatty_v1_installer_123.exe`.
///
/// Full match, case-sensitive: prefix, anything, `installer`, anything, at
/// least one digit, then the extension.
fn installer_pattern(config: &DeploymentConfig) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"^{}.*installer.*[0-9]+\.{}$",
        regex::escape(&config.installer_prefix),
        regex::escape(&config.installer_extension)
    ))
}

impl DeploymentContext {
    /// Delete installer artifacts in the scratch directory that are older
    /// than the retention window.
    ///
    /// Only fails when called before [`resolve`](Self::resolve). A missing
    /// scratch directory, an unreadable listing or a file that refuses to
    /// be deleted is logged and skipped. Performs blocking I/O.
    pub fn sweep_stale_installers(&self) -> Result<SweepReport, DeployError> {
        let env = self.snapshot()?;
        let mut report = SweepReport::default();

        let Some(scratch) = env.scratch_dir() else {
            warn!("Failed to delete old setup files: no scratch directory");
            return Ok(report);
        };

        let pattern = match installer_pattern(self.config()) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!("Failed to delete old setup files: bad name pattern: {e}");
                return Ok(report);
            }
        };
        let cutoff = self.probe().now() - self.config().retention();

        info!("Checking if old setup files should be deleted..");
        let stale = match list_stale(scratch, &pattern, cutoff) {
            Ok(stale) => stale,
            Err(e) => {
                warn!("Failed to delete old setup files: {e}");
                return Ok(report);
            }
        };

        for path in stale {
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("Deleted old setup file: {}", path.display());
                    report.deleted.push(path);
                }
                Err(e) => {
                    warn!("Failed to delete old setup file {}: {e}", path.display());
                    report.failed.push((path, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}

/// Direct children of `dir` matching `pattern` and modified strictly before
/// `cutoff`. Names that are not valid UTF-8 are matched lossily; entries
/// whose metadata cannot be read are skipped.
fn list_stale(
    dir: &Path,
    pattern: &Regex,
    cutoff: DateTime<Utc>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut stale = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !pattern.is_match(&name) {
            continue;
        }

        match entry.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) if DateTime::<Utc>::from(modified) < cutoff => {
                stale.push(entry.path());
            }
            Ok(_) => debug!("Keeping recent setup file {name}"),
            Err(e) => debug!("Skipping {name}: cannot read modification time: {e}"),
        }
    }

    Ok(stale)
}

/// Run [`DeploymentContext::sweep_stale_installers`] on the blocking pool.
///
/// If the sweep task itself dies, the scratch directory is reported under
/// [`SweepReport::failed`] with the task error as the reason.
pub async fn sweep_in_background(
    ctx: Arc<DeploymentContext>,
) -> Result<SweepReport, DeployError> {
    let scratch = ctx.scratch_dir()?;

    match tokio::task::spawn_blocking(move || ctx.sweep_stale_installers()).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Setup file sweep task failed: {e}");
            let mut report = SweepReport::default();
            if let Some(scratch) = scratch {
                report.failed.push((scratch, format!("sweep task failed: {e}")));
            }
            Ok(report)
        }
    }
}
