//! Sweep command handler.

use std::sync::Arc;

use anyhow::Result;
use deployenv_core::sweep_in_background;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Remove stale installer downloads and report what happened.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let report = sweep_in_background(Arc::clone(&ctx.deployment))
        .await
        .map_err(CliError::from)?;

    for path in &report.deleted {
        println!("deleted {}", path.display());
    }
    for (path, reason) in &report.failed {
        println!("failed  {}: {reason}", path.display());
    }
    println!(
        "{} deleted, {} failed",
        report.deleted.len(),
        report.failed.len()
    );
    Ok(())
}
