use std::path::Path;

use serde::Serialize;

use crate::checker::{CheckOutcome, base_name};
use crate::error::Result;

use super::ReportFormatter;

/// One record per mismatched file.
#[derive(Debug, Serialize)]
struct MismatchRecord<'a> {
    path: &'a Path,
    name: String,
    declared: &'a str,
}

/// JSON report for machine consumption: an array of mismatch records.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, outcomes: &[CheckOutcome]) -> Result<String> {
        let records: Vec<MismatchRecord<'_>> = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                CheckOutcome::Mismatched { path, declared } => Some(MismatchRecord {
                    path,
                    name: base_name(path),
                    declared,
                }),
                CheckOutcome::Matched { .. } | CheckOutcome::Skipped { .. } => None,
            })
            .collect();

        let mut output = serde_json::to_string_pretty(&records)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
