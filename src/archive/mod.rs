//! Deterministic zip packaging for binary framework bundles.
//!
//! Walks a bundle directory (an `.xcframework`, a `.framework`, or any other
//! tree) and writes its regular files into a zip archive whose bytes depend
//! only on file names, contents and permission bits.
//!
//! # Entry Metadata
//!
//! | Field | Value |
//! |-------|-------|
//! | Name | path relative to the bundle's parent, `/`-separated |
//! | Order | ascending by name |
//! | Modified | 1980-01-01 00:00:00 |
//! | Created by | Unix |
//! | External attributes | `(S_IFREG \| mode) << 16` |
//! | Compression | Deflate, level 9 |
//!
//! # Example
//!
//! ```no_run
//! use xcframework_packager::archive::build_archive;
//!
//! let archived = build_archive("build/Kit.xcframework", "dist/Kit.xcframework.zip")?;
//! assert!(archived.path.is_absolute());
//! # Ok::<(), xcframework_packager::archive::Error>(())
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod settings;
mod utils;

// Public re-exports
pub use builder::{Archiver, build_archive};
pub use error::{Context, Error, ErrorExt, Result};
pub use settings::{ArchiveSettings, ArchiveSettingsBuilder, CompressionLevel};

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedBundle {
    /// Absolute path of the archive, with symbolic links resolved on Unix.
    pub path: std::path::PathBuf,

    /// Number of file entries written.
    pub entries: usize,

    /// Sum of the source file sizes in bytes.
    pub uncompressed_size: u64,

    /// Size of the archive file in bytes.
    pub size: u64,
}
