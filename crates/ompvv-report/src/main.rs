// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! ompvv-report: structured reports from OpenMP validation suite logs
//!
//! Reads the harness logs named on the command line and prints their test
//! results as JSON, CSV, or a pass/fail summary.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use ompvv_report::{Config, run};

fn main() -> Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Starting ompvv-report");

    let status = run(&config)?;
    Ok(if status.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
