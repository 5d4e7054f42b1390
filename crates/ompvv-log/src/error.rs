// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ompvv-log

use thiserror::Error;

/// Errors raised while decoding a single marker line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// The line does not begin with the `*-*-*` sentinel
    #[error("Not a marker line: {line:?}")]
    NotAMarker {
        /// The offending line
        line: String,
    },

    /// The marker carries fewer fields than its layout requires
    #[error("Marker has too few fields: expected at least {expected}, found {found}")]
    TooFewFields {
        /// Minimum number of sentinel-delimited fields
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },
}

/// Errors that can occur while reconstructing results from a log file
#[derive(Debug, Error)]
pub enum LogError {
    /// Error reading the log
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file does not exist
    #[error("Log file not found: {path}")]
    NotFound {
        /// The path that was requested
        path: String,
    },

    /// The path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile {
        /// The path that was requested
        path: String,
    },

    /// A marker line could not be decoded
    #[error("Malformed marker on line {line}: {source}")]
    Marker {
        /// 1-based line number within the log
        line: usize,
        /// The underlying decode failure
        #[source]
        source: MarkerError,
    },
}
