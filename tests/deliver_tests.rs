use std::fs;
use std::path::PathBuf;

use postcheck::core::models::AreaKey;
use postcheck::errors::ReportError;
use postcheck::features::deliver::{ensure_fresh_output, format_usage, output_path, write_report};
use postcheck::usage::UsageEstimate;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("postcheck_test_{}_{}", std::process::id(), name));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn test_output_path_is_derived_from_area_key() {
    let area = AreaKey::new("SW7 2BU");
    let path = output_path(&PathBuf::from("/tmp"), &area);
    assert_eq!(path, PathBuf::from("/tmp/postcode_summary_sw72bu.md"));
}

#[test]
fn test_fresh_output_passes_for_missing_file() {
    let dir = scratch_dir("fresh");
    let path = output_path(&dir, &AreaKey::new("AB12CD"));

    assert!(ensure_fresh_output(&path).is_ok());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_existing_output_is_a_conflict() {
    let dir = scratch_dir("conflict");
    let area = AreaKey::new("AB12CD");
    let path = output_path(&dir, &area);
    fs::write(&path, "earlier run").unwrap();

    match ensure_fresh_output(&path) {
        Err(ReportError::OutputConflict(msg)) => {
            assert!(msg.contains("postcode_summary_ab12cd.md"));
        }
        other => panic!("Expected OutputConflict, got {other:?}"),
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_report_produces_titled_markdown() {
    let dir = scratch_dir("write");
    let area = AreaKey::new("SW72BU");
    let path = output_path(&dir, &area);

    write_report(&path, &area, "### Summary body").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "# Postcode Summary for sw72bu\n\n### Summary body\n");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_format_usage_reports_tokens_and_costs() {
    let usage = UsageEstimate {
        input_tokens: 12000,
        output_tokens: 1500,
        input_cost: 0.0096,
        output_cost: 0.0032,
    };
    let block = format_usage(&usage);

    assert!(block.contains("## Token Usage Statistics"));
    assert!(block.contains("Input tokens (approx): 12000 ($0.01)"));
    assert!(block.contains("Output tokens (approx): 1500 ($0.00)"));
    assert!(block.contains("Total inference cost: $0.01"));
}

#[test]
fn test_write_report_never_clobbers_an_existing_file() {
    let dir = scratch_dir("clobber");
    let area = AreaKey::new("SW72BU");
    let path = output_path(&dir, &area);
    fs::write(&path, "original report").unwrap();

    match write_report(&path, &area, "second run") {
        Err(ReportError::OutputConflict(_)) => {}
        other => panic!("Expected OutputConflict, got {other:?}"),
    }

    // The original file must be left unmodified
    assert_eq!(fs::read_to_string(&path).unwrap(), "original report");

    fs::remove_dir_all(&dir).ok();
}
