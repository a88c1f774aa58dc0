//! Core ArchiveSettings struct and implementations.

use super::CompressionLevel;
use std::path::{Path, PathBuf};
use zip::DateTime;

/// Settings for a single archive build.
///
/// Constructed via [`ArchiveSettingsBuilder`](super::ArchiveSettingsBuilder).
/// Both paths are absolute and lexically normalized.
///
/// # Examples
///
/// ```no_run
/// use xcframework_packager::archive::ArchiveSettingsBuilder;
///
/// # fn example() -> xcframework_packager::archive::Result<()> {
/// let settings = ArchiveSettingsBuilder::new()
///     .source("build/Kit.xcframework")
///     .output("dist/Kit.xcframework.zip")
///     .build()?;
/// assert!(settings.source().is_absolute());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ArchiveSettings {
    /// Bundle directory to package.
    source: PathBuf,

    /// Archive file to write.
    output: PathBuf,

    /// Compression applied to every entry.
    compression_level: CompressionLevel,

    /// Modification time stamped on every entry.
    last_modified: DateTime,
}

impl ArchiveSettings {
    pub(super) fn new(source: PathBuf, output: PathBuf, compression_level: CompressionLevel) -> Self {
        Self {
            source,
            output,
            compression_level,
            // DOS epoch, 1980-01-01 00:00:00
            last_modified: DateTime::default(),
        }
    }

    /// Returns the bundle directory being packaged.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the archive path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the compression level.
    pub fn compression_level(&self) -> CompressionLevel {
        self.compression_level
    }

    /// Returns the fixed modification time written for every entry.
    pub fn last_modified(&self) -> DateTime {
        self.last_modified
    }

    /// Returns the directory archive names are made relative to.
    ///
    /// This is the parent of the source, so the bundle's own directory name
    /// leads every entry. A source without a parent (a filesystem root) is
    /// its own base.
    pub fn archive_base(&self) -> &Path {
        self.source.parent().unwrap_or(self.source.as_path())
    }
}
