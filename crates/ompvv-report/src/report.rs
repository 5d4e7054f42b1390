// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end report generation
//!
//! Ties the pieces together the way the binary runs them: collect, optionally
//! relativize paths, render, and write.

use std::path::Path;

use ompvv_log::TestResult;
use tracing::{error, info, warn};

use crate::collect::collect_results;
use crate::config::Config;
use crate::error::ReportError;
use crate::render::render;

/// Message printed when no log produced any result
pub const NO_RESULTS_MESSAGE: &str = " ==> No log files to process";

/// What a report run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Number of results rendered
    pub results: usize,
    /// Number of log files that failed to parse
    pub failed_files: usize,
}

impl RunStatus {
    /// Check if every log file parsed
    #[must_use]
    pub fn success(&self) -> bool {
        self.failed_files == 0
    }
}

/// Produce the report described by `config`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a pattern is malformed,
/// rendering fails, or the report cannot be written. Log files that fail to
/// parse are reported in the returned status rather than as an error.
pub fn run(config: &Config) -> Result<RunStatus, ReportError> {
    config.validate()?;

    let batch = collect_results(&config.log_files)?;
    if !batch.all_parsed() {
        for (path, e) in &batch.failures {
            error!(path = %path.display(), error = %e, "Skipping log file");
        }
        warn!(
            skipped = batch.failures.len(),
            parsed = batch.files_parsed,
            "Some log files could not be parsed"
        );
    }

    let status = RunStatus {
        results: batch.results.len(),
        failed_files: batch.failures.len(),
    };

    if batch.results.is_empty() {
        println!("{NO_RESULTS_MESSAGE}");
        return Ok(status);
    }

    let results: Vec<TestResult> = match config.relative_base()? {
        Some(base) => batch
            .results
            .into_iter()
            .map(|result| result.with_relative_path(&base))
            .collect(),
        None => batch.results,
    };

    let rendered = render(config.format, &results)?;
    write_output(config.output.as_deref(), &rendered)?;
    info!(results = status.results, format = ?config.format, "Report written");

    Ok(status)
}

/// Write the report to `path`, or to stdout when no path is given
///
/// # Errors
///
/// Returns `ReportError::Io` if the file cannot be written.
pub fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), ReportError> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "Wrote report file");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::render::parse_json;
    use similar_asserts::assert_eq;

    fn log_for(test_path: &Path) -> String {
        format!(
            "*-*-*BEGIN*-*-*COMPILE CC=gcc -fopenmp*-*-*d0*-*-*sys*-*-*{}*-*-*gcc*-*-*abc*-*-*4.5*-*-*\n\
             *-*-*END*-*-*COMPILE*-*-*d1*-*-*sys*-*-*PASS*-*-*none*-*-*abc*-*-*\n\
             *-*-*BEGIN*-*-*RUN*-*-*d2*-*-*sys*-*-*bin/a.c*-*-*none*-*-*abc*-*-*4.5*-*-*\n\
             *-*-*END*-*-*RUN*-*-*d3*-*-*sys*-*-*PASS*-*-*none*-*-*abc*-*-*\n",
            test_path.display()
        )
    }

    #[test]
    fn test_run_writes_relativized_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base = dir.path().join("sollve");
        std::fs::create_dir(&base).expect("create base");

        let log = dir.path().join("gcc.log");
        std::fs::write(&log, log_for(&base.join("tests/4.5/a.c"))).expect("write log");

        let output = dir.path().join("report.json");
        let config = Config {
            log_files: vec![log.display().to_string()],
            format: OutputFormat::Json,
            output: Some(output.clone()),
            base_path: Some(base),
            ..Default::default()
        };

        let status = run(&config).expect("run");
        assert!(status.success());
        assert_eq!(status.results, 1);

        let results = parse_json(&std::fs::read_to_string(&output).expect("read")).expect("json");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].test_path, "tests/4.5/a.c");
    }

    #[test]
    fn test_run_without_relativization_keeps_absolute_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let test_path = dir.path().join("tests/a.c");
        let log = dir.path().join("gcc.log");
        std::fs::write(&log, log_for(&test_path)).expect("write log");

        let output = dir.path().join("report.json");
        let config = Config {
            log_files: vec![log.display().to_string()],
            output: Some(output.clone()),
            ..Default::default()
        };

        run(&config).expect("run");
        let results = parse_json(&std::fs::read_to_string(&output).expect("read")).expect("json");
        assert_eq!(results[0].test_path, test_path.display().to_string());
    }

    #[test]
    fn test_run_reports_failed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("report.csv");
        let config = Config {
            log_files: vec![dir.path().join("missing.log").display().to_string()],
            format: OutputFormat::Csv,
            output: Some(output.clone()),
            ..Default::default()
        };

        let status = run(&config).expect("run");
        assert!(!status.success());
        assert_eq!(status.results, 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.txt");
        write_output(Some(&path), "PASS\nChecked 0 runs").expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "PASS\nChecked 0 runs"
        );
    }
}
