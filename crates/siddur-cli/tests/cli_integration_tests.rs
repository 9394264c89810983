//! CLI integration tests
//!
//! Run the built binary and check its stdout and exit status.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn siddur(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_siddur"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_cli_classify_prints_conditions() {
    // GIVEN the first day of Chanukah 5786
    // WHEN classify runs
    let output = siddur(&["classify", "--date", "2025-12-15"]);

    // THEN the holiday is reported as JSON
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["holiday"]["kind"], "chanukah");
    assert_eq!(json["holiday"]["day"], 1);
}

#[test]
fn test_cli_plan_reuses_directory() {
    let temp_dir = TempDir::new().unwrap();
    let directory = temp_dir.path().join("plans.json");
    let dir_arg = directory.to_str().unwrap();

    let first = siddur(&[
        "plan", "--date", "2025-11-03", "--service", "mincha", "--directory", dir_arg,
    ]);
    let second = siddur(&[
        "plan", "--date", "2025-11-04", "--service", "mincha", "--directory", dir_arg,
    ]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(stdout_json(&first)["reused"], false);
    assert_eq!(stdout_json(&second)["reused"], true);
    assert!(directory.exists());
}

#[test]
fn test_cli_plan_prints_catalog_text() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = temp_dir.path().join("catalog.yaml");
    fs::write(
        &catalog,
        "schema_version: 0\nchunks:\n  - id: ashrei\n    language: he\n    text: \"אשרי\"\n",
    )
    .unwrap();

    let output = siddur(&[
        "plan",
        "--date",
        "2025-11-03",
        "--service",
        "mincha",
        "--catalog",
        catalog.to_str().unwrap(),
        "--text",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("אשרי"));
    assert!(stdout.contains("[missing: "));
}

#[test]
fn test_cli_unknown_service_fails() {
    let output = siddur(&["plan", "--date", "2025-11-03", "--service", "musaf"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_UNSUPPORTED_SERVICE_TYPE"));
}

#[test]
fn test_cli_out_of_range_reports_date() {
    let output = siddur(&["classify", "--date", "1850-06-01"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERR_DATE_OUT_OF_RANGE"));
    assert!(stderr.contains("1850-06-01"));
}

#[test]
fn test_cli_should_play() {
    let sabbath = siddur(&["should-play", "--date", "2026-05-23", "--hour", "9"]);
    let weekday = siddur(&["should-play", "--date", "2025-10-29", "--hour", "9"]);

    assert!(sabbath.status.success());
    assert_eq!(String::from_utf8(sabbath.stdout).unwrap().trim(), "shacharis");
    assert!(weekday.status.success());
    assert!(weekday.stdout.is_empty());
}
