//! Deflate compression level for archive entries.

use zip::CompressionMethod;

/// ZIP compression level for archive entries.
///
/// Level 0 stores entries uncompressed; levels 1-9 use Deflate.
///
/// # Examples
///
/// ```
/// use xcframework_packager::archive::CompressionLevel;
///
/// assert_eq!(CompressionLevel::default(), CompressionLevel::MAX);
/// assert_eq!(CompressionLevel::new(15).level(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// No compression (level 0, Stored method).
    pub const NONE: CompressionLevel = CompressionLevel(0);

    /// Maximum Deflate compression (level 9).
    pub const MAX: CompressionLevel = CompressionLevel(9);

    /// Creates a compression level, clamping values above 9.
    #[must_use]
    pub fn new(level: u32) -> Self {
        CompressionLevel(level.min(9))
    }

    /// Returns the compression level value (0-9).
    #[must_use]
    pub fn level(&self) -> u32 {
        self.0
    }

    /// Returns the zip compression method for this level.
    pub(crate) fn method(&self) -> CompressionMethod {
        if self.0 == 0 {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u32> for CompressionLevel {
    fn from(level: u32) -> Self {
        CompressionLevel::new(level)
    }
}
