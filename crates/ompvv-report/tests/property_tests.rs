// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for report rendering
//!
//! These tests use proptest to check the rendering contracts hold for
//! arbitrary field contents, including commas, quotes and newlines.

use ompvv_log::{Outcome, TestResult, relativize_path};
use ompvv_report::{Summary, parse_json, render_csv, render_json};
use proptest::prelude::*;
use std::path::Path;

// ============================================================================
// Strategies
// ============================================================================

/// Field text including the characters the CSV rendering has to strip
fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("a, b, c".to_string()),
        Just("line one\nline two\n".to_string()),
        Just("\"quoted\"".to_string()),
        Just("日本語テスト".to_string()),
        "[a-zA-Z0-9 ,.\n/=-]{0,40}",
    ]
}

fn outcome() -> impl Strategy<Value = Option<Outcome>> {
    prop_oneof![
        Just(None),
        Just(Some(Outcome::Pass)),
        Just(Some(Outcome::Fail)),
        Just(Some(Outcome::Other("TIMEOUT".to_string()))),
    ]
}

fn test_result() -> impl Strategy<Value = TestResult> {
    (
        ("[a-z_]{1,10}", prop_oneof![Just(".c"), Just(".cpp"), Just(".F90"), Just(".bin")]),
        (field(), field(), field(), field()),
        (outcome(), outcome(), any::<bool>()),
    )
        .prop_map(
            |((stem, ext), (path, compiler, compiler_output, runtime_output), (cr, rr, ro))| {
                TestResult {
                    test_name: format!("{stem}{ext}"),
                    test_path: path,
                    compiler_name: compiler,
                    compiler_output,
                    runtime_output,
                    compiler_result: cr,
                    runtime_result: rr,
                    runtime_only: ro,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_json_round_trip(results in prop::collection::vec(test_result(), 0..20)) {
        let json = render_json(&results).expect("render");
        let back = parse_json(&json).expect("parse");
        prop_assert_eq!(back, results);
    }

    #[test]
    fn prop_csv_one_line_per_result(results in prop::collection::vec(test_result(), 0..20)) {
        let csv = render_csv(&results);
        let rows: Vec<&str> = csv.lines().collect();
        prop_assert_eq!(rows.len(), results.len() + 1);
        for row in rows {
            prop_assert_eq!(row.split(", ").count(), 18);
        }
    }

    #[test]
    fn prop_summary_counts_are_consistent(results in prop::collection::vec(test_result(), 0..40)) {
        let summary = Summary::from_results(&results);
        prop_assert_eq!(summary.total, results.len());
        let failing = results.iter().filter(|r| !r.passed()).count();
        prop_assert_eq!(summary.failures.len(), failing);
        for stats in &summary.by_extension {
            prop_assert!(stats.passed + stats.build_failures <= stats.total);
        }
    }

    #[test]
    fn prop_relative_paths_untouched(path in "[a-z]{1,8}(/[a-z]{1,8}){0,4}", base in "/[a-z]{1,8}") {
        prop_assert_eq!(relativize_path(&path, Path::new(&base)), path);
    }

    #[test]
    fn prop_relativize_under_base(base in "/[a-z]{1,8}/[a-z]{1,8}", rest in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let absolute = format!("{base}/{rest}");
        prop_assert_eq!(relativize_path(&absolute, Path::new(&base)), rest);
    }
}
