// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for the ompvv-report binary
//!
//! These tests run the built binary against the fixture logs and check the
//! report it prints or writes, plus its exit status.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use ompvv_report::parse_json;
use similar_asserts::assert_eq;

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

fn ompvv_report(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ompvv-report"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("OMPVV_REPORT_FORMAT")
        .env_remove("OMPVV_REPORT_BASE_PATH")
        .output()
        .expect("Failed to run ompvv-report")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// Formats
// ============================================================================

#[test]
fn test_default_format_is_json() {
    let output = ompvv_report(&[&fixture("summit-gcc.log")]);
    assert!(output.status.success());

    let results = parse_json(&stdout(&output)).expect("stdout should be a JSON report");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].test_name, "offloading_success.c");
}

#[test]
fn test_csv_format() {
    let output = ompvv_report(&["-f", "CSV", &fixture("summit-gcc.log")]);
    assert!(output.status.success());

    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 4, "header plus three rows");
    assert!(rows[0].starts_with("testSystem, testName"));
    assert!(rows[2].contains("\"test_target_map_array.cpp\""));
}

#[test]
fn test_summary_format() {
    let output = ompvv_report(&["--format", "summary", &fixture("summit-gcc.log")]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("FAILED\nChecked 3 runs\nReported errors(2):"));
    assert!(text.contains("  test_target_map_array.cpp on gcc 8.1.1 (compiler) "));
    assert!(text.contains("  test_target_if.F90 on gcc 8.1.1 (runtime) \n\nCondensed Summary by file type:"));
    assert!(text.contains("  .cpp pass rate: 0/1 (0%) [ 1 build failures ]"));
    assert!(text.contains("  .c pass rate: 1/1 (100%) [ 0 build failures ]"));
    assert!(text.contains("  .f90 pass rate: 0/1 (0%) [ 0 build failures ]"));
}

// ============================================================================
// Inputs and outputs
// ============================================================================

#[test]
fn test_glob_pattern_concatenates_files() {
    let pattern = format!("{}/*.log", fixtures_dir().display());
    let output = ompvv_report(&[&pattern]);
    assert!(output.status.success());

    let results = parse_json(&stdout(&output)).expect("JSON report");
    // runtime-only.log sorts before summit-gcc.log
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].test_name, "legacy.bin");
    assert!(results[0].runtime_only);
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = dir.path().join("report.json");
    let output = ompvv_report(&[
        "-o",
        &report.display().to_string(),
        &fixture("runtime-only.log"),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let results =
        parse_json(&std::fs::read_to_string(&report).expect("read report")).expect("JSON");
    assert_eq!(results.len(), 1);
}

#[test]
fn test_no_results_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pattern = format!("{}/*.log", dir.path().display());
    let output = ompvv_report(&[&pattern]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), " ==> No log files to process");
}

#[test]
fn test_missing_file_fails_but_reports_the_rest() {
    let output = ompvv_report(&[
        "/nonexistent/ompvv/12345.log",
        &fixture("runtime-only.log"),
    ]);
    assert!(!output.status.success());

    let results = parse_json(&stdout(&output)).expect("JSON report");
    assert_eq!(results.len(), 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("12345.log"));
}

#[test]
fn test_invalid_format_is_rejected() {
    let output = ompvv_report(&["-f", "xml", &fixture("summit-gcc.log")]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_arguments_is_rejected() {
    let output = ompvv_report(&[]);
    assert!(!output.status.success());
}
