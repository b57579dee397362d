//! Resolve-once deployment context shared with collaborators.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::environment::{DeploymentEnvironment, DeploymentShape};
use super::error::DeployError;
use super::platform::DefaultDeploymentProbe;
use crate::config::DeploymentConfig;
use crate::ports::DeploymentProbe;

/// Owner of the resolved deployment environment.
///
/// Created by the host's startup code, resolved once, then shared by
/// reference (typically behind an `Arc`). Until [`resolve`](Self::resolve)
/// has published a snapshot, every accessor returns
/// [`DeployError::Uninitialized`].
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use deployenv_core::{DeploymentConfig, DeploymentContext};
///
/// let ctx = Arc::new(DeploymentContext::for_current_process(DeploymentConfig::default()));
/// ctx.resolve(None);
/// if ctx.install_action_available()? {
///     let target = ctx.build_scratch_file_path("Chatty_installer")?;
///     // ...
/// }
/// ```
pub struct DeploymentContext {
    probe: Arc<dyn DeploymentProbe>,
    config: DeploymentConfig,
    state: RwLock<Option<Arc<DeploymentEnvironment>>>,
}

impl DeploymentContext {
    /// Create an unresolved context over the given probe.
    pub fn new(probe: Arc<dyn DeploymentProbe>, config: DeploymentConfig) -> Self {
        Self {
            probe,
            config,
            state: RwLock::new(None),
        }
    }

    /// Create an unresolved context that probes the running process.
    pub fn for_current_process(config: DeploymentConfig) -> Self {
        Self::new(Arc::new(DefaultDeploymentProbe::new()), config)
    }

    /// Detect the environment and publish it.
    ///
    /// Each call re-derives every field from scratch and replaces the
    /// previous snapshot; readers holding the old `Arc` keep seeing the old
    /// values. Hosts should call this exactly once at startup.
    pub fn resolve(&self, archive_hint: Option<&Path>) -> Arc<DeploymentEnvironment> {
        let env = Arc::new(DeploymentEnvironment::detect(
            self.probe.as_ref(),
            &self.config,
            archive_hint,
        ));

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.is_some() {
            debug!("Replacing previously resolved deployment environment");
        }
        *state = Some(Arc::clone(&env));
        env
    }

    /// Whether [`resolve`](Self::resolve) has completed at least once.
    pub fn is_resolved(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The resolved environment.
    pub fn snapshot(&self) -> Result<Arc<DeploymentEnvironment>, DeployError> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(DeployError::Uninitialized)
    }

    pub const fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub(crate) fn probe(&self) -> &dyn DeploymentProbe {
        self.probe.as_ref()
    }

    fn path_of(
        &self,
        field: impl FnOnce(&DeploymentEnvironment) -> Option<&Path>,
    ) -> Result<Option<PathBuf>, DeployError> {
        let env = self.snapshot()?;
        Ok(field(env.as_ref()).map(Path::to_path_buf))
    }

    pub fn runtime_root(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::runtime_root)
    }

    pub fn native_launcher(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::native_launcher)
    }

    pub fn packaged_executable(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::packaged_executable)
    }

    pub fn packaged_executable_dir(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::packaged_executable_dir)
    }

    pub fn archive_path(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::archive_path)
    }

    pub fn archive_dir(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::archive_dir)
    }

    pub fn scratch_dir(&self) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(DeploymentEnvironment::scratch_dir)
    }

    /// See [`DeploymentEnvironment::is_standalone_deployment`].
    pub fn is_standalone_deployment(&self) -> Result<bool, DeployError> {
        Ok(self.snapshot()?.is_standalone_deployment())
    }

    /// See [`DeploymentEnvironment::install_action_available`].
    pub fn install_action_available(&self) -> Result<bool, DeployError> {
        Ok(self.snapshot()?.install_action_available())
    }

    /// See [`DeploymentEnvironment::install_target_dir`].
    pub fn install_target_dir(
        &self,
        prefer_standalone: bool,
    ) -> Result<Option<PathBuf>, DeployError> {
        self.path_of(|env| env.install_target_dir(prefer_standalone))
    }

    pub fn deployment_shape(&self) -> Result<DeploymentShape, DeployError> {
        Ok(self.snapshot()?.shape())
    }
}

impl fmt::Debug for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentContext")
            .field("config", &self.config)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}
