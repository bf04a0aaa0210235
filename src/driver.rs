// ABOUTME: Package processing pipeline from sensor samples to rendered summaries
// ABOUTME: Isolates failures per package and reports what was processed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Driver
//!
//! Each package runs factory → training → formatter independently. A failing
//! package is logged and recorded in the [`DriverReport`]; the next package is
//! still processed unless fail-fast is configured.

use std::io::Write;

use tracing::{debug, info, warn};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutSample;
use workout_intelligence::{read_sample, TrainingCalculator};

use crate::config::TrackerConfig;
use crate::formatters::{format_message, OutputFormat};

/// Sample packages shipped with the tracker
#[must_use]
pub fn sample_packages() -> Vec<WorkoutSample> {
    vec![
        WorkoutSample::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutSample::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutSample::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// A package that could not be processed
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input
    pub index: usize,
    /// Activity code as received
    pub code: String,
    /// Why processing failed
    pub error: AppError,
}

/// Outcome of a driver run
#[derive(Debug, Default)]
pub struct DriverReport {
    /// Number of summaries written
    pub processed: usize,
    /// Packages that failed, in input order
    pub failures: Vec<PackageFailure>,
    /// Whether processing stopped early on a failure
    pub halted: bool,
}

impl DriverReport {
    /// True when every package produced a summary
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turn one package into its rendered summary line
///
/// # Errors
///
/// Returns the factory, calculation or formatting error for this package
pub fn process_sample(sample: &WorkoutSample, format: OutputFormat) -> AppResult<String> {
    let workout = read_sample(sample)?;
    let message = workout.summary()?;
    debug!(
        training_type = %message.training_type,
        distance_km = message.distance,
        calories = message.calories,
        "Computed training summary"
    );
    format_message(&message, format)
}

/// Process packages in order, writing one line per successful package
///
/// # Errors
///
/// Returns an error only if writing to `out` fails; per-package failures are
/// collected in the report.
pub fn run_packages<W: Write>(
    samples: &[WorkoutSample],
    config: &TrackerConfig,
    out: &mut W,
) -> AppResult<DriverReport> {
    let mut report = DriverReport::default();

    for (index, sample) in samples.iter().enumerate() {
        match process_sample(sample, config.output_format) {
            Ok(line) => {
                writeln!(out, "{line}").map_err(|e| {
                    AppError::internal(format!("Failed to write summary: {e}")).with_source(e)
                })?;
                report.processed += 1;
            }
            Err(error) => {
                warn!(index, code = %sample.code, error = %error, "Skipping sensor package");
                report.failures.push(PackageFailure {
                    index,
                    code: sample.code.clone(),
                    error,
                });
                if config.fail_fast {
                    report.halted = true;
                    break;
                }
            }
        }
    }

    info!(
        processed = report.processed,
        failed = report.failures.len(),
        halted = report.halted,
        "Finished processing sensor packages"
    );
    Ok(report)
}
