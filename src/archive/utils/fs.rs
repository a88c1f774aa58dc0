//! File system utilities for archiving.
//!
//! Path resolution and output-side directory preparation with path-carrying
//! errors.

use crate::archive::error::{ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Resolves `path` against the current directory and removes `.`/`..` components.
///
/// Symbolic links are not resolved.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .fs_context("resolving absolute path", path)?
        .into_owned())
}

/// Creates every missing parent directory of `path`.
pub fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::debug!("Creating output directory {}", parent.display());
        std::fs::create_dir_all(parent).fs_context("creating output directory", parent)?;
    }
    Ok(())
}

/// Resolves the written archive path, following symbolic links on Unix.
///
/// Must be called after the file exists.
#[cfg(unix)]
pub fn resolve_output_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).fs_context("resolving archive path", path)
}

/// Resolves the written archive path.
///
/// `canonicalize` yields verbatim `\\?\` paths on Windows, so the lexical path is kept.
#[cfg(not(unix))]
pub fn resolve_output_path(path: &Path) -> Result<PathBuf> {
    absolute_path(path)
}

/// Returns the rwx permission bits of a file.
///
/// Setuid, setgid and sticky bits are dropped: a zip entry only records `0o777`.
#[cfg(unix)]
pub fn permission_bits(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

/// Returns the rwx permission bits of a file.
///
/// Hosts without Unix modes report read-only files as 0o444 and everything else as 0o644.
#[cfg(not(unix))]
pub fn permission_bits(metadata: &std::fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}
