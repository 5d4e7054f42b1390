// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ompvv-log: Test harness log reconstruction
//!
//! This library crate turns the free-form logs written by the OpenMP
//! validation and verification harness into structured test results, one per
//! compilation and runtime unit.
//!
//! # Example
//!
//! ```no_run
//! use ompvv_log::{parse_file, Reconstructor};
//!
//! // Parse a complete log file
//! let results = parse_file("logs/clang.log").unwrap();
//!
//! // Or drive the state machine line by line
//! let mut reconstructor = Reconstructor::new();
//! reconstructor.process_line("compiler output\n").unwrap();
//! let results = reconstructor.finish();
//! ```

pub mod error;
pub mod marker;
pub mod parser;
pub mod result;

pub use error::{LogError, MarkerError};
pub use marker::{Language, Marker, MarkerKind, parse_marker};
pub use parser::{IgnoreSet, Reconstructor, SectionState, parse_file, parse_reader};
pub use result::{FailureStage, Outcome, TestResult, relativize_path};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::LogError;
    pub use crate::parser::{Reconstructor, parse_file, parse_reader};
    pub use crate::result::{Outcome, TestResult};
}
