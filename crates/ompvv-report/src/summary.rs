// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Pass/fail summary

use std::fmt;

use ompvv_log::{FailureStage, TestResult};

/// Test file extensions with their own pass-rate line, in display order
pub const KNOWN_EXTENSIONS: [&str; 3] = [".cpp", ".c", ".f90"];

/// Counts for one file extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    /// Runs of tests with this extension
    pub total: usize,
    /// Runs that passed every phase
    pub passed: usize,
    /// Runs that failed to compile
    pub build_failures: usize,
}

impl ExtensionStats {
    /// Pass rate as a whole percentage, truncated
    #[must_use]
    pub fn pass_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.passed * 100 / self.total
        }
    }
}

/// Aggregate pass/fail summary over a set of results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of results
    pub total: usize,
    /// Counts per entry of [`KNOWN_EXTENSIONS`]
    pub by_extension: [ExtensionStats; 3],
    /// Failure lines such as `a.c on gcc (runtime)`
    pub failures: Vec<String>,
}

impl Summary {
    /// Tally results
    ///
    /// Results whose extension is not in [`KNOWN_EXTENSIONS`] count towards
    /// the total and the failure list only.
    #[must_use]
    pub fn from_results(results: &[TestResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            let stage = result.failure_stage();
            if let Some(description) = result.failure_description() {
                summary.failures.push(description);
            }

            let known = result
                .extension()
                .and_then(|ext| KNOWN_EXTENSIONS.iter().position(|known| *known == ext));
            if let Some(idx) = known {
                let stats = &mut summary.by_extension[idx];
                stats.total += 1;
                match stage {
                    Some(FailureStage::Compiler) => stats.build_failures += 1,
                    Some(FailureStage::Runtime) => {}
                    None => stats.passed += 1,
                }
            }
        }

        summary
    }

    /// Check if every result passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Stats for a known extension, e.g. `.c`
    #[must_use]
    pub fn extension(&self, ext: &str) -> Option<&ExtensionStats> {
        KNOWN_EXTENSIONS
            .iter()
            .position(|known| *known == ext)
            .map(|idx| &self.by_extension[idx])
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", if self.all_passed() { "PASS" } else { "FAILED" })?;
        write!(f, "Checked {} runs", self.total)?;
        if !self.all_passed() {
            write!(f, "\nReported errors({}):", self.failures.len())?;
            for failure in &self.failures {
                write!(f, "\n  {failure} ")?;
            }
            writeln!(f)?;
        }

        write!(f, "\nCondensed Summary by file type:")?;
        for ext in KNOWN_EXTENSIONS {
            if let Some(stats) = self.extension(ext).filter(|stats| stats.total > 0) {
                write!(
                    f,
                    "\n  {ext} pass rate: {}/{} ({}%) [ {} build failures ]",
                    stats.passed,
                    stats.total,
                    stats.pass_percent(),
                    stats.build_failures
                )?;
            }
        }
        Ok(())
    }
}
