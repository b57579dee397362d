//! Command handlers.
//!
//! Handlers take the resolved [`crate::CliContext`], call into the
//! deployment context and format the result for the terminal. They hold no
//! detection logic of their own.

pub mod paths;
pub mod scratch_path;
pub mod sweep;
