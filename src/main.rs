//! package_xcframework - deterministic zip packaging for framework bundles.
//!
//! Usage: `package_xcframework <source-path> <output-path>`

use std::process;
use xcframework_packager::{PackagerError, cli};

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = cli::run() {
        match &e {
            PackagerError::Cli(err) => {
                log::debug!("{err}");
                eprintln!("{}", cli::USAGE);
            }
            PackagerError::Archive(_) => {
                eprintln!("Error: {e}");
                for suggestion in e.recovery_suggestions() {
                    eprintln!("  {suggestion}");
                }
            }
        }
        process::exit(e.exit_code());
    }
}
