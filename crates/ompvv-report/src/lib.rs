// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ompvv-report library
//!
//! This module exports the report pipeline behind the `ompvv-report` binary
//! for use in integration tests and as a library.

pub mod collect;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod summary;

pub use collect::{Batch, collect_results, expand_pattern};
pub use config::{Config, OutputFormat};
pub use error::ReportError;
pub use render::{parse_json, render, render_csv, render_json};
pub use report::{RunStatus, run};
pub use summary::Summary;
