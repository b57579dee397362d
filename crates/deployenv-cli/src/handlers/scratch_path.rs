//! Scratch-path command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print a fresh scratch file path. Nothing is created on disk.
pub fn execute(ctx: &CliContext, base_name: &str) -> Result<()> {
    let path = ctx
        .deployment
        .build_scratch_file_path(base_name)
        .map_err(CliError::from)?;
    println!("{}", path.display());
    Ok(())
}
