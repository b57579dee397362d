//! Deployment environment detection and installer housekeeping.
//!
//! This module answers the questions a self-updater asks before doing
//! anything:
//! - Is there a runtime, and does it ship a native launcher?
//! - Which archive was the application loaded from?
//! - Is there a packaged executable next to the runtime and the archive?
//! - Is there a writable scratch directory for downloads?
//!
//! # Design
//!
//! - [`DeploymentEnvironment`] is an immutable snapshot; detection never fails
//! - [`DeploymentContext`] publishes one snapshot and guards every accessor
//!   with [`DeployError::Uninitialized`]
//! - OS access goes through the [`crate::ports::DeploymentProbe`] port

mod checks;
mod context;
mod environment;
mod error;
mod platform;
mod scratch;
mod sweep;

#[cfg(test)]
mod test_utils;

pub use context::DeploymentContext;
pub use environment::{DeploymentEnvironment, DeploymentShape};
pub use error::DeployError;
pub use platform::DefaultDeploymentProbe;
pub use sweep::{SweepReport, sweep_in_background};
