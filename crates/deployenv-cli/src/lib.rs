//! `deployenv` command-line adapter.
//!
//! Wires the process-backed probe into a [`deployenv_core::DeploymentContext`]
//! and exposes the diagnostics and housekeeping commands.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

#[cfg(test)]
mod test_utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with_probe};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
