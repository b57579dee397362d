//! Fixtures for deployment tests.
//!
//! A [`Layout`] is a throwaway install tree:
//!
//! ```text
//! <tmp>/install/Chatty.exe              packaged executable (optional)
//! <tmp>/install/app/Chatty.jar          archive (optional)
//! <tmp>/install/runtime/bin/javaw.exe   native launcher (optional)
//! <tmp>/scratch/                        temp directory
//! ```
//!
//! Only the runtime and scratch directories exist up front; tests create
//! the rest as needed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use crate::ports::{DeploymentProbe, ProbeError, ProbeResult};

/// Probe with fixed answers.
#[derive(Debug, Clone)]
pub struct FixtureProbe {
    runtime_home: Option<PathBuf>,
    loaded_code: Option<PathBuf>,
    temp_dir: Option<PathBuf>,
    now: DateTime<Utc>,
}

impl FixtureProbe {
    /// Probe whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            runtime_home: None,
            loaded_code: None,
            temp_dir: None,
            now: Utc::now(),
        }
    }

    pub fn with_loaded_code(mut self, path: PathBuf) -> Self {
        self.loaded_code = Some(path);
        self
    }

    pub fn with_temp_dir(mut self, path: PathBuf) -> Self {
        self.temp_dir = Some(path);
        self
    }

    pub fn without_temp_dir(mut self) -> Self {
        self.temp_dir = None;
        self
    }

    /// Pin the clock.
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl DeploymentProbe for FixtureProbe {
    fn runtime_home(&self) -> ProbeResult<PathBuf> {
        self.runtime_home
            .clone()
            .ok_or_else(|| ProbeError::NoExecutable("fixture".to_string()))
    }

    fn loaded_code_location(&self) -> ProbeResult<PathBuf> {
        self.loaded_code
            .clone()
            .ok_or_else(|| ProbeError::NoExecutable("fixture".to_string()))
    }

    fn temp_dir(&self) -> ProbeResult<PathBuf> {
        self.temp_dir.clone().ok_or(ProbeError::NoTempDir)
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Temporary install tree; removed on drop.
pub struct Layout {
    tmp: TempDir,
    root: PathBuf,
}

impl Layout {
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = tmp.path().join("install");
        fs::create_dir_all(root.join("runtime").join("bin")).expect("create runtime");
        fs::create_dir_all(tmp.path().join("scratch")).expect("create scratch");
        Self { tmp, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scratch(&self) -> PathBuf {
        self.tmp.path().join("scratch")
    }

    pub fn runtime(&self) -> PathBuf {
        self.root.join("runtime")
    }

    pub fn archive(&self) -> PathBuf {
        let dir = self.root.join("app");
        fs::create_dir_all(&dir).expect("create app dir");
        let path = dir.join("Chatty.jar");
        fs::write(&path, b"PK").expect("write archive");
        path
    }

    pub fn packaged_executable(&self) -> PathBuf {
        let path = self.root.join("Chatty.exe");
        fs::write(&path, b"MZ").expect("write executable");
        path
    }

    pub fn launcher(&self) -> PathBuf {
        let path = self.runtime().join("bin").join("javaw.exe");
        fs::write(&path, b"MZ").expect("write launcher");
        path
    }

    /// Probe pointing at this layout's runtime and scratch directories.
    pub fn probe(&self) -> FixtureProbe {
        FixtureProbe {
            runtime_home: Some(self.runtime()),
            loaded_code: None,
            temp_dir: Some(self.scratch()),
            now: Utc::now(),
        }
    }
}
