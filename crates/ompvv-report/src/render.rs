// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! Turns reconstructed results into one of the report formats. The JSON
//! document is lossless and can be read back with [`parse_json`]; CSV rows
//! drop commas and newlines so each record stays on one line.

use ompvv_log::TestResult;

use crate::config::OutputFormat;
use crate::error::ReportError;
use crate::summary::Summary;

/// Column names of the CSV report, in row order
pub const CSV_HEADER: [&str; 18] = [
    "testSystem",
    "testName",
    "testPath",
    "ompVersion",
    "compilerName",
    "compilerCommand",
    "startingCompilerDate",
    "endingCompilerDate",
    "compilerPass",
    "compilerOutput",
    "runtimeOnly",
    "binaryPath",
    "startingRuntimeDate",
    "endingRuntimeDate",
    "runtimePass",
    "runtimeOutput",
    "gitCommit",
    "testComments",
];

/// Render results in the requested format
///
/// # Errors
///
/// Returns `ReportError::Json` if JSON serialization fails.
pub fn render(format: OutputFormat, results: &[TestResult]) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => render_json(results),
        OutputFormat::Csv => Ok(render_csv(results)),
        OutputFormat::Summary => Ok(Summary::from_results(results).to_string()),
    }
}

/// Render results as a JSON array with sorted keys and two-space indentation
///
/// # Errors
///
/// Returns `ReportError::Json` if serialization fails.
pub fn render_json(results: &[TestResult]) -> Result<String, ReportError> {
    // Going through Value sorts the object keys
    let value = serde_json::to_value(results)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Read a JSON report back into results
///
/// # Errors
///
/// Returns `ReportError::Json` if the document is not a valid report.
pub fn parse_json(json: &str) -> Result<Vec<TestResult>, ReportError> {
    Ok(serde_json::from_str(json)?)
}

/// Render results as CSV, header first, one row per result
#[must_use]
pub fn render_csv(results: &[TestResult]) -> String {
    let mut out = CSV_HEADER.join(", ");
    out.push('\n');
    for result in results {
        out.push_str(&csv_row(result));
        out.push('\n');
    }
    out
}

fn csv_row(result: &TestResult) -> String {
    let compiler_result = result.compiler_result.as_ref().map_or("", |o| o.as_str());
    let runtime_result = result.runtime_result.as_ref().map_or("", |o| o.as_str());
    let runtime_only = if result.runtime_only { "True" } else { "False" };

    let fields: [&str; 18] = [
        &result.system,
        &result.test_name,
        &result.test_path,
        &result.spec_version,
        &result.compiler_name,
        &result.compiler_command,
        &result.compiler_start,
        &result.compiler_end,
        compiler_result,
        &result.compiler_output,
        runtime_only,
        &result.binary_path,
        &result.runtime_start,
        &result.runtime_end,
        runtime_result,
        &result.runtime_output,
        &result.commit,
        &result.comments,
    ];

    fields
        .iter()
        .map(|field| format!("\"{}\"", csv_clean(field)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn csv_clean(field: &str) -> String {
    field.chars().filter(|c| !matches!(c, ',' | '\n')).collect()
}
