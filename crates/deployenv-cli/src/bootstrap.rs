//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the deployment context is created and
//! resolved for the CLI adapter. Command handlers receive the resolved
//! context and never construct probes themselves.

use std::path::PathBuf;
use std::sync::Arc;

use deployenv_core::{
    DefaultDeploymentProbe, DeploymentConfig, DeploymentContext, DeploymentProbe, validate_config,
};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Optional JSON file with naming overrides.
    pub config_file: Option<PathBuf>,
    /// Archive hint passed to resolution.
    pub archive: Option<PathBuf>,
}

impl CliConfig {
    /// Take bootstrap settings from the parsed command line.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_file: cli.config.clone(),
            archive: cli.archive.clone(),
        }
    }

    fn deployment_config(&self) -> Result<DeploymentConfig, CliError> {
        match &self.config_file {
            Some(path) => {
                debug!("Loading deployment config from {}", path.display());
                Ok(DeploymentConfig::from_json_file(path)?)
            }
            None => {
                let config = DeploymentConfig::default();
                validate_config(&config)?;
                Ok(config)
            }
        }
    }
}

/// Resolved deployment context for CLI commands.
pub struct CliContext {
    pub deployment: Arc<DeploymentContext>,
}

/// Build and resolve the deployment context for the running process.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    bootstrap_with_probe(config, Arc::new(DefaultDeploymentProbe::new()))
}

/// Build and resolve the deployment context against `probe`.
pub fn bootstrap_with_probe(
    config: &CliConfig,
    probe: Arc<dyn DeploymentProbe>,
) -> Result<CliContext, CliError> {
    let deployment = Arc::new(DeploymentContext::new(probe, config.deployment_config()?));
    deployment.resolve(config.archive.as_deref());
    Ok(CliContext { deployment })
}
