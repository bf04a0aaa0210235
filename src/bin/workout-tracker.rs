// ABOUTME: Workout tracker CLI - prints training summaries for the bundled sensor packages
// ABOUTME: Handles output format, fail-fast and verbosity flags on top of environment config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the text summaries
//! workout-tracker
//!
//! # Emit JSON, one object per line
//! workout-tracker --format json
//!
//! # Stop at the first failing package, with debug logs on stderr
//! workout-tracker --fail-fast -v
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use workout_tracker::{
    config::TrackerConfig,
    driver::{run_packages, sample_packages},
    formatters::OutputFormat,
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    version,
    about = "Workout statistics for running, walking and swimming sessions",
    long_about = "Computes distance, mean speed and calories burned for each sensor package and prints one summary line per package."
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Stop at the first package that fails
    #[arg(long)]
    fail_fast: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = TrackerConfig::from_env()?.with_overrides(cli.format, cli.fail_fast);
    let mut stdout = io::stdout().lock();
    let report = run_packages(&sample_packages(), &config, &mut stdout)?;

    for failure in &report.failures {
        error!(
            index = failure.index,
            code = %failure.code,
            "Package failed: {}",
            failure.error
        );
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
