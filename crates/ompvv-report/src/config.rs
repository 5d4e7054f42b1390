// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the ompvv-report command
//!
//! This module provides the command-line surface: which logs to read, how to
//! render them, where to write the result, and logging options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Report format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document, one object per result
    #[default]
    Json,
    /// Comma separated rows, one per result
    Csv,
    /// Pass/fail summary with per-language pass rates
    Summary,
}

/// Process the log files of the OpenMP validation and verification suite
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ompvv-report")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Log files to parse
    ///
    /// Each entry is a path or a glob pattern such as `logs/*.log`.
    #[arg(value_name = "LOG_FILES", required = true, num_args = 1..)]
    pub log_files: Vec<String>,

    /// Format to print the results in
    #[arg(
        short,
        long,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Json,
        env = "OMPVV_REPORT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Make absolute test paths relative to the current directory
    #[arg(short, long, default_value = "false")]
    pub relative_path: bool,

    /// Make absolute test paths relative to this directory
    ///
    /// Implies --relative-path.
    #[arg(long, env = "OMPVV_REPORT_BASE_PATH")]
    pub base_path: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Directory test paths are made relative to, if relativization is on
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn relative_base(&self) -> Result<Option<PathBuf>, ConfigError> {
        match (&self.base_path, self.relative_path) {
            (Some(base), _) => std::path::absolute(base)
                .map(Some)
                .map_err(ConfigError::CurrentDirUnavailable),
            (None, true) => std::env::current_dir()
                .map(Some)
                .map_err(ConfigError::CurrentDirUnavailable),
            (None, false) => Ok(None),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base path is specified but is not an existing directory
    /// - The output file's parent directory does not exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref base) = self.base_path {
            if !base.is_dir() {
                return Err(ConfigError::BasePathNotDirectory(base.clone()));
            }
        }

        if let Some(ref output) = self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(ConfigError::OutputDirectoryNotFound(parent.to_path_buf()));
                }
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Base path is missing or not a directory
    #[error("Base path is not a directory: {0}")]
    BasePathNotDirectory(PathBuf),

    /// Output file would land in a missing directory
    #[error("Output directory not found: {0}")]
    OutputDirectoryNotFound(PathBuf),

    /// Current directory could not be determined
    #[error("Cannot determine current directory: {0}")]
    CurrentDirUnavailable(std::io::Error),
}
