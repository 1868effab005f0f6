use std::path::Path;

use super::*;
use crate::checker::SkipReason;

#[test]
fn empty_outcomes_produce_empty_array() {
    let output = JsonFormatter.format(&[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn only_mismatches_are_recorded() {
    let outcomes = vec![
        CheckOutcome::Matched {
            path: Path::new("A.swift").to_path_buf(),
        },
        CheckOutcome::Mismatched {
            path: Path::new("Sources/B.swift").to_path_buf(),
            declared: "X.swift".to_string(),
        },
        CheckOutcome::Skipped {
            path: Path::new("Short.swift").to_path_buf(),
            reason: SkipReason::TooShort,
        },
    ];
    let output = JsonFormatter.format(&outcomes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["path"], "Sources/B.swift");
    assert_eq!(records[0]["name"], "B.swift");
    assert_eq!(records[0]["declared"], "X.swift");
}

#[test]
fn output_ends_with_newline() {
    let output = JsonFormatter.format(&[]).unwrap();
    assert!(output.ends_with('\n'));
}
