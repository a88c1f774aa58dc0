//! Builder for constructing ArchiveSettings.

use super::{ArchiveSettings, CompressionLevel};
use crate::archive::{error::Context, utils::fs::absolute_path};
use std::path::{Path, PathBuf};

/// Builder for constructing [`ArchiveSettings`].
///
/// # Examples
///
/// ```no_run
/// use xcframework_packager::archive::{ArchiveSettingsBuilder, CompressionLevel};
///
/// # fn example() -> xcframework_packager::archive::Result<()> {
/// let settings = ArchiveSettingsBuilder::new()
///     .source("build/Kit.xcframework")
///     .output("dist/Kit.xcframework.zip")
///     .compression_level(CompressionLevel::MAX)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ArchiveSettingsBuilder {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    compression_level: CompressionLevel,
}

impl ArchiveSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the bundle directory to package.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive path. Any existing file there is replaced.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the compression level.
    ///
    /// Default: [`CompressionLevel::MAX`]
    pub fn compression_level(mut self, level: impl Into<CompressionLevel>) -> Self {
        self.compression_level = level.into();
        self
    }

    /// Builds the settings, resolving both paths against the current directory.
    ///
    /// Existence of the source is not checked here; that happens when the
    /// archive is built.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` or `output` is missing, or if the current
    /// directory cannot be determined.
    pub fn build(self) -> crate::archive::Result<ArchiveSettings> {
        let source = self.source.context("source is required")?;
        let output = self.output.context("output is required")?;

        Ok(ArchiveSettings::new(
            absolute_path(&source)?,
            absolute_path(&output)?,
            self.compression_level,
        ))
    }
}
