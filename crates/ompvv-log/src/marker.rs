// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Marker line decoding
//!
//! The test harness brackets every compilation and every run with marker lines
//! whose fields are separated by the `*-*-*` sentinel:
//!
//! ```text
//! *-*-*BEGIN*-*-*COMPILE CC=gcc -O3 -fopenmp*-*-*<date>*-*-*<system>*-*-*<file>*-*-*<compiler>*-*-*<commit>*-*-*<version>*-*-*
//! *-*-*BEGIN*-*-*RUN*-*-*<date>*-*-*<system>*-*-*<binary>*-*-*none*-*-*<commit>*-*-*<version>*-*-*
//! *-*-*END*-*-*RUN*-*-*<date>*-*-*<system>*-*-*PASS*-*-*<comment>*-*-*<commit>*-*-*
//! ```
//!
//! # Example
//!
//! ```
//! use ompvv_log::marker::{parse_marker, MarkerKind};
//!
//! let line = "*-*-*END*-*-*RUN*-*-*today*-*-*summit*-*-*PASS*-*-*none*-*-*463391f*-*-*";
//! let marker = parse_marker(line).unwrap();
//! assert!(matches!(marker.kind, MarkerKind::End { .. }));
//! ```

use crate::error::MarkerError;

/// Separator between marker fields; a marker line starts with it
pub const SENTINEL: &str = "*-*-*";

/// Every marker kind is read up to the OpenMP version field at index 7
const MIN_FIELDS: usize = 8;

const FIELD_DATE: usize = 2;
const FIELD_SYSTEM: usize = 3;
const FIELD_COMMIT: usize = 6;
const FIELD_SPEC_VERSION: usize = 7;

/// Prefix of the second field of a compile marker, including the space
const COMPILE_PREFIX_LEN: usize = "COMPILE ".len();

/// Source language announced by the compile command tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// `CC=...`
    C,
    /// `CPP=...`
    Cpp,
    /// `F=...`
    Fortran,
}

impl Language {
    /// Split a raw compile invocation into its language and the actual command
    ///
    /// The tag is followed by a single separator character (`=` in practice)
    /// which is dropped along with it.
    #[must_use]
    pub fn split_command(invocation: &str) -> Option<(Self, &str)> {
        let (language, offset) = if invocation.starts_with("CC") {
            (Self::C, 3)
        } else if invocation.starts_with("CPP") {
            (Self::Cpp, 4)
        } else if invocation.starts_with('F') {
            (Self::Fortran, 2)
        } else {
            return None;
        };
        Some((language, invocation.get(offset..).unwrap_or_default()))
    }
}

/// Kind-specific payload of a marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    /// Start of a compilation section
    BeginCompile {
        /// Source file path as written by the harness
        file: String,
        /// Base name of `file`
        test_name: String,
        /// Compiler identity, e.g. `gcc 8.1.1`
        compiler: String,
        /// Language tag of the invocation, if recognised
        language: Option<Language>,
        /// Compiler invocation, or `undefined` when the tag is unrecognised
        command: String,
    },
    /// Start of a runtime section
    BeginRun {
        /// Binary path as written by the harness
        file: String,
        /// Base name of `file`
        test_name: String,
    },
    /// End of the currently open section
    End {
        /// Outcome text, expected to contain `PASS` or `FAIL`
        result: String,
        /// Free-text comment
        comment: String,
    },
    /// Anything else; carried through so the caller can report it
    Undefined {
        /// The first field, which named no known kind
        tag: String,
    },
}

/// A decoded marker line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Timestamp text, kept verbatim
    pub date: String,
    /// Host system identifier
    pub system: String,
    /// Commit identifier of the test suite
    pub commit: String,
    /// OpenMP version the test targets, e.g. `4.5`
    pub spec_version: String,
    /// What this marker announces
    pub kind: MarkerKind,
}

/// Returns true if `line` is a marker line
#[must_use]
pub fn is_marker(line: &str) -> bool {
    line.starts_with(SENTINEL)
}

/// Decode a single marker line
///
/// # Errors
///
/// Returns `MarkerError::NotAMarker` if the line does not start with the
/// sentinel, and `MarkerError::TooFewFields` if it carries fewer than the
/// eight positional fields every marker is read for.
pub fn parse_marker(line: &str) -> Result<Marker, MarkerError> {
    let Some(rest) = line.strip_prefix(SENTINEL) else {
        return Err(MarkerError::NotAMarker {
            line: line.to_string(),
        });
    };

    let fields: Vec<&str> = rest.split(SENTINEL).collect();
    if fields.len() < MIN_FIELDS {
        return Err(MarkerError::TooFewFields {
            expected: MIN_FIELDS,
            found: fields.len(),
        });
    }

    let kind = if fields[0].starts_with("BEGIN") {
        if fields[1].starts_with("COMPILE") {
            let file = fields[4];
            let invocation = fields[1].get(COMPILE_PREFIX_LEN..).unwrap_or_default();
            let (language, command) = match Language::split_command(invocation) {
                Some((language, command)) => (Some(language), command.to_string()),
                None => (None, "undefined".to_string()),
            };
            MarkerKind::BeginCompile {
                file: file.to_string(),
                test_name: base_name(file).to_string(),
                compiler: fields[5].to_string(),
                language,
                command,
            }
        } else if fields[1].starts_with("RUN") {
            let file = fields[4];
            MarkerKind::BeginRun {
                file: file.to_string(),
                test_name: base_name(file).to_string(),
            }
        } else {
            MarkerKind::Undefined {
                tag: format!("{} {}", fields[0], fields[1]),
            }
        }
    } else if fields[0].starts_with("END") {
        MarkerKind::End {
            result: fields[4].to_string(),
            comment: fields[5].to_string(),
        }
    } else {
        MarkerKind::Undefined {
            tag: fields[0].to_string(),
        }
    };

    Ok(Marker {
        date: fields[FIELD_DATE].to_string(),
        system: fields[FIELD_SYSTEM].to_string(),
        commit: fields[FIELD_COMMIT].to_string(),
        spec_version: fields[FIELD_SPEC_VERSION].to_string(),
        kind,
    })
}

/// Final `/`-separated component of a path
fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
