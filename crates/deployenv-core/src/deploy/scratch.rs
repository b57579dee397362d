//! Scratch file naming for downloaded installers.

use std::path::PathBuf;

use super::context::DeploymentContext;
use super::error::DeployError;

impl DeploymentContext {
    /// Path for a new file in the scratch directory.
    ///
    /// Named `<base_name>_<unix millis>.<installer extension>`; the timestamp
    /// only keeps repeated calls from colliding. Nothing is created on disk.
    pub fn build_scratch_file_path(&self, base_name: &str) -> Result<PathBuf, DeployError> {
        let scratch = self.scratch_dir()?.ok_or(DeployError::ScratchDirUnavailable)?;
        let millis = self.probe().now().timestamp_millis();
        Ok(scratch.join(format!(
            "{base_name}_{millis}.{}",
            self.config().installer_extension
        )))
    }
}
