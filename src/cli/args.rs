//! Command line argument parsing.
//!
//! Exactly two positional arguments: the bundle to package and the archive to
//! write. There are no flags, so values starting with `-` are plain paths.

use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the arguments are wrong.
pub const USAGE: &str = "usage: package_xcframework <source-path> <output-path>";

/// Deterministic zip packager for binary framework bundles
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "package_xcframework",
    about = "Deterministic zip packager for binary framework bundles",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Bundle directory to package
    #[arg(value_name = "SOURCE_PATH", allow_hyphen_values = true)]
    pub source: PathBuf,

    /// Archive file to write (parent directories are created)
    #[arg(value_name = "OUTPUT_PATH", allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl Args {
    /// Parse arguments from an iterator (first item is the program name).
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| CliError::InvalidArguments {
            reason: e
                .kind()
                .as_str()
                .unwrap_or("unrecognized arguments")
                .to_string(),
        })
    }
}
