//! Paths command handler.
//!
//! Displays the resolved deployment environment for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the environment in `key = value` format followed by the derived
/// capability flags.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", render(ctx)?);
    Ok(())
}

fn render(ctx: &CliContext) -> Result<String, CliError> {
    let deployment = &ctx.deployment;
    let env = deployment.snapshot()?;
    Ok(format!(
        "{env}\nstandalone = {}\ninstall_available = {}",
        deployment.is_standalone_deployment()?,
        deployment.install_action_available()?
    ))
}
