//! Zip serialization of collected entries.
//!
//! Every entry gets the same timestamp, a Unix creation system with its
//! permission bits in the external attributes, and the configured compression.
//! Given the same entries and settings the written bytes are identical.

use super::collect::FileEntry;
use crate::archive::{
    error::{ErrorExt, Result},
    settings::ArchiveSettings,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use zip::{ZipWriter, write::SimpleFileOptions};

/// Entries at or above this size need Zip64 extensions.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// Writes `entries` in order into a new archive at the settings' output path.
///
/// An existing file at that path is truncated.
pub fn write_archive(entries: &[FileEntry], settings: &ArchiveSettings) -> Result<()> {
    let output = settings.output();
    let file = File::create(output).fs_context("creating archive", output)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));

    for entry in entries {
        log::debug!(
            "Adding {} (mode {:o}, {} bytes)",
            entry.archive_name,
            entry.mode,
            entry.size
        );

        zip.start_file(entry.archive_name.as_str(), entry_options(entry, settings))?;

        let mut source = File::open(&entry.path).fs_context("opening source file", &entry.path)?;
        io::copy(&mut source, &mut zip).fs_context("copying file into archive", &entry.path)?;
    }

    let mut writer = zip.finish()?;
    writer.flush().fs_context("flushing archive", output)?;

    Ok(())
}

/// Builds the normalized zip options for one entry.
fn entry_options(entry: &FileEntry, settings: &ArchiveSettings) -> SimpleFileOptions {
    let level = settings.compression_level();

    let options = SimpleFileOptions::default()
        .compression_method(level.method())
        .last_modified_time(settings.last_modified())
        .unix_permissions(entry.mode)
        .large_file(entry.size >= ZIP64_THRESHOLD);

    if level.level() == 0 {
        options
    } else {
        options.compression_level(Some(i64::from(level.level())))
    }
}
