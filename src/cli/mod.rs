//! Command line interface for the packager.
//!
//! Parses arguments and runs the archiver. Argument errors come back as
//! [`CliError`](crate::error::CliError) so `main` can print [`USAGE`].

mod args;

pub use args::{Args, USAGE};

use crate::{archive::build_archive, error::Result};

/// Main CLI entry point
pub fn run() -> Result<()> {
    run_with(std::env::args_os())
}

/// Runs the CLI with explicit arguments (first item is the program name).
///
/// Prints the absolute archive path on success.
pub fn run_with<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args = Args::parse_from_args(args)?;

    let archived = build_archive(&args.source, &args.output)?;
    println!("{}", archived.path.display());
    Ok(())
}
