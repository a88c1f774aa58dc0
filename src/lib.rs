//! Deterministic zip packaging for binary framework bundles.
//!
//! Packages an `.xcframework` (or any directory tree) into a zip archive with
//! fixed timestamps, sorted entries and preserved Unix permissions, so that
//! rebuilding from the same input yields byte-identical output.
//!
//! It can be used both as a CLI tool and as a library dependency.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod archive;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use archive::{ArchivedBundle, Archiver, build_archive};
pub use error::{CliError, PackagerError, Result};
