// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log reconstruction
//!
//! Rebuilds [`TestResult`] records from a harness log by walking it line by
//! line. Marker lines open and close sections; every other line is captured as
//! the output of the open section.
//!
//! # Example
//!
//! ```no_run
//! use ompvv_log::parser::parse_file;
//!
//! let results = parse_file("logs/gcc.log").unwrap();
//! for result in &results {
//!     println!("{}: {:?}", result.test_name, result.runtime_result);
//! }
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LogError;
use crate::marker::{self, Marker, MarkerKind};
use crate::result::{Outcome, TestResult};

/// Which kind of section is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    /// Between sections; output lines are discarded
    #[default]
    Closed,
    /// Inside a compilation section
    InCompile,
    /// Inside a runtime section
    InRun,
}

/// Names of tests whose compilation failed
///
/// A later run section for one of these names, with no compilation in front
/// of it, is output for a binary that never built and is skipped.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test whose compilation failed
    pub fn insert(&mut self, test_name: impl Into<String>) {
        self.names.insert(test_name.into());
    }

    /// Check whether run sections for `test_name` are suppressed
    #[must_use]
    pub fn contains(&self, test_name: &str) -> bool {
        self.names.contains(test_name)
    }

    /// Number of suppressed names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if nothing is suppressed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Accumulates one record across the markers of a test sequence
///
/// Owned by the [`Reconstructor`] and taken whole at every emission, so a
/// record can only leave through [`RecordBuilder::finish`].
#[derive(Debug, Default)]
struct RecordBuilder {
    record: TestResult,
}

impl RecordBuilder {
    fn has_test(&self) -> bool {
        !self.record.test_name.is_empty()
    }

    fn compile_failed(&self) -> bool {
        self.record.compile_failed()
    }

    fn begin_compile(
        &mut self,
        marker: &Marker,
        file: &str,
        test_name: &str,
        compiler: &str,
        command: &str,
    ) {
        let record = &mut self.record;
        record.test_name = test_name.to_string();
        record.runtime_only = false;
        set_if_present(&mut record.test_path, file);
        set_if_present(&mut record.compiler_name, compiler);
        set_if_present(&mut record.compiler_command, command);
        set_if_present(&mut record.commit, &marker.commit);
        set_if_present(&mut record.spec_version, &marker.spec_version);
        record.compiler_start = marker.date.clone();
        set_if_present(&mut record.system, &marker.system);
    }

    fn begin_runtime_only(&mut self, marker: &Marker, test_name: &str) {
        let record = &mut self.record;
        if record.commit.is_empty() {
            record.commit = marker.commit.clone();
        }
        record.test_name = test_name.to_string();
        record.runtime_only = true;
        set_if_present(&mut record.spec_version, &marker.spec_version);
    }

    fn begin_run(&mut self, marker: &Marker, binary: &str) {
        let record = &mut self.record;
        record.binary_path = binary.to_string();
        record.runtime_start = marker.date.clone();
        set_if_present(&mut record.system, &marker.system);
    }

    fn end_compile(&mut self, marker: &Marker, result: &str, comment: &str, output: String) {
        let record = &mut self.record;
        record.compiler_result = Outcome::parse(result);
        record.compiler_output = output;
        record.compiler_end = marker.date.clone();
        set_if_present(&mut record.comments, comment);
    }

    fn end_run(&mut self, marker: &Marker, result: &str, comment: &str, output: String) {
        let record = &mut self.record;
        record.runtime_result = Outcome::parse(result);
        record.runtime_output = output;
        record.runtime_end = marker.date.clone();
        set_if_present(&mut record.comments, comment);
    }

    fn finish(self) -> TestResult {
        self.record
    }
}

fn set_if_present(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

/// Line-driven state machine turning one log into test results
///
/// Feed every line, including its trailing newline, to
/// [`Reconstructor::process_line`], then call [`Reconstructor::finish`].
#[derive(Debug, Default)]
pub struct Reconstructor {
    state: SectionState,
    current: RecordBuilder,
    buffer: String,
    ignored: IgnoreSet,
    results: Vec<TestResult>,
    line_number: usize,
}

impl Reconstructor {
    /// Create a reconstructor for a fresh log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section state
    #[must_use]
    pub fn state(&self) -> SectionState {
        self.state
    }

    /// Tests whose run sections are being suppressed
    #[must_use]
    pub fn ignored(&self) -> &IgnoreSet {
        &self.ignored
    }

    /// Results emitted so far
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Process a single line of the log
    ///
    /// Returns the record emitted by this line, if it closed a test.
    ///
    /// # Errors
    ///
    /// Returns `LogError::Marker` if a marker line cannot be decoded.
    pub fn process_line(&mut self, line: &str) -> Result<Option<TestResult>, LogError> {
        self.line_number += 1;

        if !marker::is_marker(line) {
            if self.state != SectionState::Closed {
                self.buffer.push_str(line);
            }
            return Ok(None);
        }

        let marker = marker::parse_marker(line).map_err(|source| LogError::Marker {
            line: self.line_number,
            source,
        })?;
        Ok(self.apply(&marker))
    }

    fn apply(&mut self, marker: &Marker) -> Option<TestResult> {
        match &marker.kind {
            MarkerKind::BeginCompile {
                file,
                test_name,
                compiler,
                language,
                command,
            } => {
                debug!(
                    line = self.line_number,
                    test = %test_name,
                    language = ?language,
                    "Compile section opened"
                );
                self.current
                    .begin_compile(marker, file, test_name, compiler, command);
                self.open(SectionState::InCompile);
                None
            }
            MarkerKind::BeginRun { file, test_name } => {
                if !self.current.has_test() {
                    if self.ignored.contains(test_name) {
                        debug!(
                            line = self.line_number,
                            test = %test_name,
                            "Skipping run section of a test that failed to compile"
                        );
                        self.close();
                        return None;
                    }
                    self.current.begin_runtime_only(marker, test_name);
                }
                debug!(line = self.line_number, test = %test_name, "Run section opened");
                self.current.begin_run(marker, file);
                self.open(SectionState::InRun);
                None
            }
            MarkerKind::End { result, comment } => {
                let output = std::mem::take(&mut self.buffer);
                let emitted = match self.state {
                    SectionState::InCompile => {
                        self.current.end_compile(marker, result, comment, output);
                        if self.current.compile_failed() {
                            let record = self.emit();
                            self.ignored.insert(record.test_name.clone());
                            Some(record)
                        } else {
                            None
                        }
                    }
                    SectionState::InRun => {
                        if self.current.compile_failed() {
                            None
                        } else {
                            self.current.end_run(marker, result, comment, output);
                            Some(self.emit())
                        }
                    }
                    SectionState::Closed => None,
                };
                self.close();
                emitted
            }
            MarkerKind::Undefined { tag } => {
                warn!(line = self.line_number, tag = %tag, "Ignoring unrecognised marker");
                None
            }
        }
    }

    fn open(&mut self, state: SectionState) {
        self.state = state;
        self.buffer.clear();
    }

    fn close(&mut self) {
        self.state = SectionState::Closed;
        self.buffer.clear();
    }

    fn emit(&mut self) -> TestResult {
        let record = std::mem::take(&mut self.current).finish();
        debug!(
            line = self.line_number,
            test = %record.test_name,
            compiler = %record.compiler_name,
            "Record emitted"
        );
        self.results.push(record.clone());
        record
    }

    /// Finish the log and return every emitted record in emission order
    ///
    /// A section still open at this point has no END marker; its partial
    /// record is dropped.
    #[must_use]
    pub fn finish(self) -> Vec<TestResult> {
        if self.state != SectionState::Closed {
            warn!(
                test = %self.current.record.test_name,
                state = ?self.state,
                "Log ended inside an open section, dropping partial record"
            );
        }
        self.results
    }
}

/// Reconstruct all test results from a line source
///
/// # Errors
///
/// Returns `LogError::Io` if reading fails and `LogError::Marker` on a
/// malformed marker line.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<TestResult>, LogError> {
    let mut reconstructor = Reconstructor::new();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        if raw.ends_with(b"\r\n") {
            raw.remove(raw.len() - 2);
        }
        reconstructor.process_line(&String::from_utf8_lossy(&raw))?;
    }

    Ok(reconstructor.finish())
}

/// Reconstruct all test results from a log file
///
/// # Errors
///
/// Returns `LogError::NotFound` if the path does not exist,
/// `LogError::NotAFile` if it is not a regular file, and otherwise the errors
/// of [`parse_reader`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<TestResult>, LogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LogError::NotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_file() {
        return Err(LogError::NotAFile {
            path: path.display().to_string(),
        });
    }

    debug!(path = %path.display(), "Parsing log file");
    let results = parse_reader(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), count = results.len(), "Parsed log file");
    Ok(results)
}
