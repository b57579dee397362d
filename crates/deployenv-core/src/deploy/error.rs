//! Deployment-context error types.

use thiserror::Error;

/// Errors surfaced by [`crate::DeploymentContext`].
///
/// Everything else that can go wrong while detecting the environment or
/// sweeping is logged and absorbed; these two are the only conditions a
/// caller has to handle.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DeployError {
    /// An accessor ran before `resolve` completed. This is an ordering bug
    /// in the host's startup sequence.
    #[error("Deployment environment not initialized")]
    Uninitialized,

    /// A scratch path was requested but no writable temp directory exists.
    #[error("No writable scratch directory available")]
    ScratchDirUnavailable,
}
