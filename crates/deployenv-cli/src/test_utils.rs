//! Install-tree fixtures for CLI tests.
//!
//! ```text
//! <tmp>/Chatty/Chatty.exe          packaged executable (standalone trees)
//! <tmp>/Chatty/app/Chatty.jar      archive
//! <tmp>/Chatty/runtime/bin/        runtime, no launcher
//! <tmp>/tmp/                       temp directory
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use deployenv_core::{DeploymentProbe, ProbeResult};
use tempfile::TempDir;

/// Probe answering from an [`InstallTree`].
#[derive(Debug)]
pub struct TreeProbe {
    runtime: PathBuf,
    loaded_code: PathBuf,
    scratch: PathBuf,
}

impl DeploymentProbe for TreeProbe {
    fn runtime_home(&self) -> ProbeResult<PathBuf> {
        Ok(self.runtime.clone())
    }

    fn loaded_code_location(&self) -> ProbeResult<PathBuf> {
        Ok(self.loaded_code.clone())
    }

    fn temp_dir(&self) -> ProbeResult<PathBuf> {
        Ok(self.scratch.clone())
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Temporary install tree; removed on drop.
pub struct InstallTree {
    tmp: TempDir,
}

impl InstallTree {
    /// Tree with the archive but no packaged executable.
    pub fn archive_only() -> Self {
        let tmp = tempfile::tempdir().expect("temp dir");
        let install = tmp.path().join("Chatty");
        fs::create_dir_all(install.join("app")).expect("create app dir");
        fs::create_dir_all(install.join("runtime").join("bin")).expect("create runtime");
        fs::create_dir_all(tmp.path().join("tmp")).expect("create temp dir");
        fs::write(install.join("app").join("Chatty.jar"), b"PK").expect("write archive");
        Self { tmp }
    }

    /// Tree with the archive and the packaged executable.
    pub fn standalone() -> Self {
        let tree = Self::archive_only();
        fs::write(tree.install().join("Chatty.exe"), b"MZ").expect("write executable");
        tree
    }

    pub fn install(&self) -> PathBuf {
        self.tmp.path().join("Chatty")
    }

    pub fn archive(&self) -> PathBuf {
        self.install().join("app").join("Chatty.jar")
    }

    pub fn scratch(&self) -> PathBuf {
        self.tmp.path().join("tmp")
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Probe whose loaded code is the given path.
    pub fn probe_loading(&self, loaded_code: PathBuf) -> Arc<TreeProbe> {
        Arc::new(TreeProbe {
            runtime: self.install().join("runtime"),
            loaded_code,
            scratch: self.scratch(),
        })
    }

    /// Probe whose loaded code is the tree's archive.
    pub fn probe(&self) -> Arc<TreeProbe> {
        self.probe_loading(self.archive())
    }
}
