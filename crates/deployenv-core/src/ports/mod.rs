//! Port definitions for deployenv.
//!
//! Ports are the seams between the pure detection logic and the process it
//! runs in. Implementations live next to their callers: the process-backed
//! probe in `deploy::platform`, fixture probes in tests.

mod deployment_probe;

pub use deployment_probe::{DeploymentProbe, ProbeError, ProbeResult};
