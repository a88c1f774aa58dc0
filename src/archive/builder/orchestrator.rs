//! Main archive orchestration.
//!
//! This module provides the [`Archiver`] that validates the source, collects
//! its files, and writes them into the output archive.

use super::{collect::collect_entries, writer::write_archive};
use crate::{
    archive::{
        ArchivedBundle,
        error::{Error, ErrorExt, Result},
        settings::{ArchiveSettings, ArchiveSettingsBuilder},
        utils::fs::{create_parent_dirs, resolve_output_path},
    },
    bail,
};
use std::path::Path;

/// Packages a bundle directory into a deterministic zip archive.
///
/// Convenience wrapper over [`Archiver`] with default settings.
///
/// # Examples
///
/// ```no_run
/// use xcframework_packager::archive::build_archive;
///
/// let archived = build_archive("build/Kit.xcframework", "dist/Kit.xcframework.zip")?;
/// println!("{}", archived.path.display());
/// # Ok::<(), xcframework_packager::archive::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `source` does not exist; nothing is
/// written in that case. Any later I/O or zip failure is returned as-is and
/// may leave a partial archive behind.
pub fn build_archive(source: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ArchivedBundle> {
    let settings = ArchiveSettingsBuilder::new()
        .source(source)
        .output(output)
        .build()?;

    Archiver::new(settings).build()
}

/// Archive builder for one source/output pair.
///
/// # Examples
///
/// ```no_run
/// use xcframework_packager::archive::{Archiver, ArchiveSettingsBuilder};
///
/// # fn example() -> xcframework_packager::archive::Result<()> {
/// let settings = ArchiveSettingsBuilder::new()
///     .source("build/Kit.xcframework")
///     .output("dist/Kit.xcframework.zip")
///     .build()?;
///
/// let archived = Archiver::new(settings).build()?;
/// println!("{} entries, {} bytes", archived.entries, archived.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Archiver {
    settings: ArchiveSettings,
}

impl Archiver {
    /// Creates a new archiver with the given settings.
    pub fn new(settings: ArchiveSettings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the archive settings.
    pub fn settings(&self) -> &ArchiveSettings {
        &self.settings
    }

    /// Builds the archive.
    ///
    /// Steps, in order:
    /// 1. Fail with [`Error::SourceNotFound`] if the source is missing
    /// 2. Collect regular files, sorted by archive name
    /// 3. Create missing parent directories of the output
    /// 4. Write the archive, replacing any existing file
    /// 5. Report the archive's resolved path and sizes
    pub fn build(&self) -> Result<ArchivedBundle> {
        let source = self.settings.source();
        let output = self.settings.output();

        if !source.exists() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }
        if output.is_dir() {
            bail!("output path {} is a directory", output.display());
        }

        log::info!("Packaging {} into {}", source.display(), output.display());

        let mut entries = collect_entries(source, self.settings.archive_base())?;

        // A stale archive inside the bundle must not package itself.
        if let Some(index) = entries.iter().position(|e| e.path == output) {
            log::warn!(
                "Output {} lies inside the source; excluding it from the archive",
                output.display()
            );
            entries.remove(index);
        }

        if entries.is_empty() {
            log::warn!("No regular files found under {}", source.display());
        }

        create_parent_dirs(output)?;
        write_archive(&entries, &self.settings)?;

        let size = std::fs::metadata(output)
            .fs_context("reading archive metadata", output)?
            .len();
        let uncompressed_size: u64 = entries.iter().map(|e| e.size).sum();

        log::info!(
            "Wrote {} entries ({} bytes uncompressed, {} bytes archived) to {}",
            entries.len(),
            uncompressed_size,
            size,
            output.display()
        );

        Ok(ArchivedBundle {
            path: resolve_output_path(output)?,
            entries: entries.len(),
            uncompressed_size,
            size,
        })
    }
}
