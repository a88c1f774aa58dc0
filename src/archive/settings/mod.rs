//! Configuration structures for archive operations.
//!
//! Settings are constructed through [`ArchiveSettingsBuilder`]; the entry
//! metadata they carry is what keeps repeated builds byte-identical.

mod builder;
mod compression;
mod core;

pub use builder::ArchiveSettingsBuilder;
pub use compression::CompressionLevel;
pub use core::ArchiveSettings;
