// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Outcome recorded by an END marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Outcome text contained `PASS`
    Pass,
    /// Outcome text contained `FAIL`
    Fail,
    /// Anything else, kept verbatim
    Other(String),
}

impl Outcome {
    /// Classify the outcome text of an END marker
    ///
    /// Empty text means no outcome was recorded. `FAIL` wins over `PASS` when
    /// both appear.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else if text.contains("FAIL") {
            Some(Self::Fail)
        } else if text.contains("PASS") {
            Some(Self::Pass)
        } else {
            Some(Self::Other(text.to_string()))
        }
    }

    /// Text form used in rendered output
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Other(text) => text,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase a failing record failed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// The compilation did not pass
    Compiler,
    /// The compilation passed (or was absent) but the run did not
    Runtime,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compiler => f.write_str("compiler"),
            Self::Runtime => f.write_str("runtime"),
        }
    }
}

/// One compilation and runtime unit for a (test file, compiler) pair
///
/// Field names in serialized form match the labels of the JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Base name of the test file
    #[serde(rename = "Test name")]
    pub test_name: String,
    /// Test file path as written in the log
    #[serde(rename = "Test path")]
    pub test_path: String,
    /// Host system identifier
    #[serde(rename = "Test system")]
    pub system: String,
    /// Free-text comment from the last END marker that carried one
    #[serde(rename = "Test comments")]
    pub comments: String,
    /// Commit of the test suite
    #[serde(rename = "Test gitCommit")]
    pub commit: String,
    /// OpenMP version the test targets
    #[serde(rename = "OMP version")]
    pub spec_version: String,
    /// True when the log held no compilation section for this test
    #[serde(rename = "Runtime only")]
    pub runtime_only: bool,

    /// Compiler identity
    #[serde(rename = "Compiler name")]
    pub compiler_name: String,
    /// Compilation outcome
    #[serde(rename = "Compiler result", with = "outcome_text")]
    pub compiler_result: Option<Outcome>,
    /// Captured compiler output
    #[serde(rename = "Compiler output")]
    pub compiler_output: String,
    /// Compiler invocation
    #[serde(rename = "Compiler command")]
    pub compiler_command: String,
    #[serde(rename = "Compiler starting date")]
    pub compiler_start: String,
    #[serde(rename = "Compiler ending date")]
    pub compiler_end: String,

    /// Path of the binary that was run
    #[serde(rename = "Binary path")]
    pub binary_path: String,
    /// Runtime outcome
    #[serde(rename = "Runtime result", with = "outcome_text")]
    pub runtime_result: Option<Outcome>,
    /// Captured runtime output
    #[serde(rename = "Runtime output")]
    pub runtime_output: String,
    #[serde(rename = "Runtime starting date")]
    pub runtime_start: String,
    #[serde(rename = "Runtime ending date")]
    pub runtime_end: String,
}

impl TestResult {
    /// Check if the compilation failed
    #[must_use]
    pub fn compile_failed(&self) -> bool {
        self.compiler_result == Some(Outcome::Fail)
    }

    /// Check if the test passed every phase it went through
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure_stage().is_none()
    }

    /// Determine which phase, if any, this record failed in
    #[must_use]
    pub fn failure_stage(&self) -> Option<FailureStage> {
        if !self.runtime_only && self.compiler_result != Some(Outcome::Pass) {
            Some(FailureStage::Compiler)
        } else if self.runtime_result != Some(Outcome::Pass) {
            Some(FailureStage::Runtime)
        } else {
            None
        }
    }

    /// Human-readable failure line, e.g. `a.c on gcc (runtime)`
    #[must_use]
    pub fn failure_description(&self) -> Option<String> {
        self.failure_stage()
            .map(|stage| format!("{} on {} ({})", self.test_name, self.compiler_name, stage))
    }

    /// Lower-cased extension of the test name, including the dot
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.test_name
            .rfind('.')
            .map(|idx| self.test_name[idx..].to_lowercase())
    }

    /// Rewrite an absolute test path relative to `base`
    #[must_use]
    pub fn with_relative_path(mut self, base: &Path) -> Self {
        self.test_path = relativize_path(&self.test_path, base);
        self
    }
}

/// Make `path` relative to `base` if it is absolute
///
/// Relative paths, and absolute paths that cannot be expressed relative to
/// `base`, are returned unchanged.
#[must_use]
pub fn relativize_path(path: &str, base: &Path) -> String {
    let candidate = Path::new(path);
    if !candidate.is_absolute() {
        return path.to_string();
    }
    match pathdiff::diff_paths(candidate, base) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}

/// Serde adapter rendering an absent outcome as an empty string
mod outcome_text {
    use super::Outcome;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        outcome: &Option<Outcome>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(outcome.as_ref().map_or("", Outcome::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Outcome>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Outcome::parse(&text))
    }
}
