// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for ompvv-report

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while producing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Invalid command-line configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid glob pattern
    #[error("Invalid log file pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Error parsing a log file
    #[error("Log error: {0}")]
    Log(#[from] ompvv_log::LogError),

    /// Error rendering or reading the JSON report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
