use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::checker::{CheckOutcome, HeaderRule, SkipReason};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_MISMATCH_FOUND, EXIT_SUCCESS};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let filter = SuffixFilter::new(config.header.extension.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan_all(&args.paths)?;

    // Per-file reads run on rayon's pool; the indexed collect preserves
    // traversal order, so the report order is deterministic.
    let rule = HeaderRule::new(&config.header.marker, config.header.short_files);
    let outcomes = files
        .par_iter()
        .map(|path| process_file(path, &rule))
        .collect::<Result<Vec<_>>>()?;

    report_short_files(&outcomes, cli.verbose);

    let formatter: Box<dyn ReportFormatter> = match args.format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(cli.verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let report = formatter.format(&outcomes)?;
    write_report(args.output.as_deref(), &report, cli.quiet)?;

    let has_mismatches = outcomes.iter().any(CheckOutcome::is_mismatched);
    if args.strict && has_mismatches {
        Ok(EXIT_MISMATCH_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.header.extension.clone_from(ext);
    }
    if let Some(marker) = &args.marker {
        config.header.marker.clone_from(marker);
    }
    if let Some(policy) = args.short_files {
        config.header.short_files = policy;
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

fn process_file(path: &Path, rule: &HeaderRule) -> Result<CheckOutcome> {
    match fs::read_to_string(path) {
        Ok(content) => rule.check(path, &content),
        Err(e) => {
            // One unreadable file must not hide mismatches elsewhere in
            // the tree; the diagnostic goes to stderr so stdout stays one
            // base name per mismatch.
            eprintln!("warning: skipping {}: {e}", path.display());
            Ok(CheckOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Unreadable,
            })
        }
    }
}

fn report_short_files(outcomes: &[CheckOutcome], verbose: u8) {
    if verbose == 0 {
        return;
    }
    for outcome in outcomes {
        if let CheckOutcome::Skipped {
            path,
            reason: SkipReason::TooShort,
        } = outcome
        {
            eprintln!("note: {} has fewer than two lines, skipped", path.display());
        }
    }
}

fn write_report(output: Option<&Path>, report: &str, quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, report)?;
            if !quiet {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => print!("{report}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
