//! Deployment environment detection for self-updating desktop applications.
//!
//! Answers "what does the current deployment look like right now": where the
//! runtime lives, whether a native launcher or a packaged executable sits next
//! to it, which archive the application was loaded from, and whether a
//! writable scratch directory is available for installer downloads. Also
//! provides the housekeeping sweep that removes stale installer files.
//!
//! The entry point is [`DeploymentContext`]: construct it once at startup,
//! call [`DeploymentContext::resolve`], then share it with collaborators.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod deploy;
pub mod ports;

pub use config::{ConfigError, DeploymentConfig, validate_config};
pub use deploy::{
    DefaultDeploymentProbe, DeployError, DeploymentContext, DeploymentEnvironment,
    DeploymentShape, SweepReport, sweep_in_background,
};
pub use ports::{DeploymentProbe, ProbeError, ProbeResult};
