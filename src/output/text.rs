use std::fmt::Write;

use crate::checker::{CheckOutcome, base_name};
use crate::error::Result;

use super::ReportFormatter;

/// Plain-text report: one base name per mismatched file, in traversal
/// order, nothing else. Verbose mode appends a summary line.
pub struct TextFormatter {
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: 0 }
    }

    #[must_use]
    pub const fn with_verbose(verbose: u8) -> Self {
        Self { verbose }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String> {
        let mut output = String::new();
        let mut mismatched = 0_usize;
        let mut skipped = 0_usize;

        for outcome in outcomes {
            match outcome {
                CheckOutcome::Mismatched { path, .. } => {
                    mismatched += 1;
                    writeln!(output, "{}", base_name(path)).ok();
                }
                CheckOutcome::Skipped { .. } => skipped += 1,
                CheckOutcome::Matched { .. } => {}
            }
        }

        if self.verbose >= 1 {
            writeln!(
                output,
                "{} files checked, {mismatched} mismatched, {skipped} skipped",
                outcomes.len()
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
