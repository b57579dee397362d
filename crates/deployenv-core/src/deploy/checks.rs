//! Filesystem checks used while resolving the environment.
//!
//! Every check is a point-in-time snapshot. A file that exists here may be
//! gone a moment later; callers accept that race.

use std::fs;
use std::path::Path;

/// Whether `path` has the given extension (without the dot), compared exactly.
pub(super) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Whether `path` is an existing regular file with the expected extension.
pub(super) fn is_archive_file(path: &Path, extension: &str) -> bool {
    has_extension(path, extension) && fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Whether `path` is an existing directory that accepts new files.
///
/// Asks the OS for write permission; the directory is never modified.
pub(super) fn is_writable_dir(path: &Path) -> bool {
    path.is_dir() && has_write_access(path)
}

#[cfg(unix)]
fn has_write_access(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};

    access(path, AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn has_write_access(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly())
}
