use std::fs;

use crate::cli::InitArgs;
use crate::error::{HeaderGuardError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot
/// be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(HeaderGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, config_template())?;

    println!("Created configuration file: {}", args.output.display());
    Ok(())
}

#[must_use]
pub fn config_template() -> &'static str {
    r#"# header-guard configuration file
version = "1"

[scanner]
# Glob patterns excluded from the walk.
exclude = []

[header]
# Suffix that marks a file as a candidate.
extension = ".swift"
# Fixed-width comment marker preceding the declared name on the header line.
marker = "//  "
# Policy for candidate files with fewer than two lines: "skip" or "fail".
short_files = "skip"
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
