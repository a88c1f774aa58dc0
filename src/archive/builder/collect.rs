//! Source tree enumeration.
//!
//! Walks the bundle without following symbolic links, keeps regular files only,
//! and orders them by archive name so traversal order never leaks into the output.

use crate::{
    archive::{
        error::{Error, Result},
        utils::fs::permission_bits,
    },
    bail,
};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A regular file discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Forward-slash separated name inside the archive.
    pub archive_name: String,
    /// Unix permission bits (no file type bits).
    pub mode: u32,
    /// Size in bytes at enumeration time.
    pub size: u64,
}

/// Collects every regular file under `source`, named relative to `base`.
///
/// The root itself is never an entry, so a `source` that is a plain file yields
/// nothing. Symlinks, directories and special files are skipped. The result is
/// sorted ascending by archive name.
pub fn collect_entries(source: &Path, base: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(source).min_depth(1).follow_links(false) {
        let entry = entry?;

        if !entry.file_type().is_file() {
            if !entry.file_type().is_dir() {
                log::debug!("Skipping non-regular file {}", entry.path().display());
            }
            continue;
        }

        let metadata = entry.metadata()?;
        let relative = entry.path().strip_prefix(base)?;

        entries.push(FileEntry {
            archive_name: archive_name(relative)?,
            mode: permission_bits(&metadata),
            size: metadata.len(),
            path: entry.into_path(),
        });
    }

    entries.sort_by(|a, b| a.archive_name.cmp(&b.archive_name));
    Ok(entries)
}

/// Builds the archive name for a path relative to the archive base.
///
/// Components are joined with `/` and any backslash inside a component is
/// rewritten to `/`.
pub fn archive_name(relative: &Path) -> Result<String> {
    let mut parts = Vec::new();

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| Error::NonUtf8Path(relative.to_path_buf()))?;
                parts.push(part.replace('\\', "/"));
            }
            Component::CurDir => {}
            other => bail!(
                "unexpected component {:?} in archive path {}",
                other,
                relative.display()
            ),
        }
    }

    if parts.is_empty() {
        bail!("empty archive path for {}", relative.display());
    }

    Ok(parts.join("/"))
}
