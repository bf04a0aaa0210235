// ABOUTME: Integration tests for the package processing pipeline
// ABOUTME: Checks sample output, per-package failure isolation and fail-fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, SAMPLE_OUTPUT};
use workout_tracker::config::TrackerConfig;
use workout_tracker::driver::{process_sample, run_packages, sample_packages};
use workout_tracker::errors::ErrorCode;
use workout_tracker::formatters::OutputFormat;
use workout_tracker::models::WorkoutSample;

fn run_to_string(samples: &[WorkoutSample], config: &TrackerConfig) -> (String, usize, usize) {
    let mut out = Vec::new();
    let report = run_packages(samples, config, &mut out).unwrap();
    (
        String::from_utf8(out).unwrap(),
        report.processed,
        report.failures.len(),
    )
}

#[test]
fn test_sample_packages_render_in_order() {
    init_test_logging();
    let (output, processed, failed) = run_to_string(&sample_packages(), &TrackerConfig::default());

    assert_eq!(processed, 3);
    assert_eq!(failed, 0);
    assert_eq!(output.lines().collect::<Vec<_>>(), SAMPLE_OUTPUT);
}

#[test]
fn test_failure_does_not_stop_later_packages() {
    init_test_logging();
    let samples = vec![
        WorkoutSample::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutSample::new("XYZ", [1.0, 1.0, 1.0]),
        WorkoutSample::new("RUN", [15000.0]),
        WorkoutSample::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ];

    let mut out = Vec::new();
    let report = run_packages(&samples, &TrackerConfig::default(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(report.processed, 2);
    assert!(!report.halted);
    assert!(!report.is_success());
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        [SAMPLE_OUTPUT[1], SAMPLE_OUTPUT[2]]
    );

    let failures: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.index, f.code.as_str(), f.error.code))
        .collect();
    assert_eq!(
        failures,
        [
            (1, "XYZ", ErrorCode::ResourceNotFound),
            (2, "RUN", ErrorCode::InvalidFormat),
        ]
    );
}

#[test]
fn test_fail_fast_halts_on_first_error() {
    init_test_logging();
    let samples = vec![
        WorkoutSample::new("XYZ", [1.0]),
        WorkoutSample::new("RUN", [15000.0, 1.0, 75.0]),
    ];
    let config = TrackerConfig {
        fail_fast: true,
        ..TrackerConfig::default()
    };

    let mut out = Vec::new();
    let report = run_packages(&samples, &config, &mut out).unwrap();

    assert!(report.halted);
    assert_eq!(report.processed, 0);
    assert_eq!(report.failures.len(), 1);
    assert!(out.is_empty());
}

#[test]
fn test_json_run_emits_one_object_per_line() {
    init_test_logging();
    let config = TrackerConfig {
        output_format: OutputFormat::Json,
        ..TrackerConfig::default()
    };

    let (output, processed, _) = run_to_string(&sample_packages(), &config);
    let objects: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(processed, 3);
    assert_eq!(objects[0]["training_type"], "Swimming");
    assert!((objects[0]["distance"].as_f64().unwrap() - 0.994).abs() < 1e-9);
    assert!((objects[1]["calories"].as_f64().unwrap() - 797.805).abs() < 1e-9);
}

#[test]
fn test_process_sample_reports_unknown_code() {
    let err = process_sample(&WorkoutSample::new("XYZ", [1.0]), OutputFormat::Text).unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(err.to_string().contains("Unknown activity code 'XYZ'"));
}

#[test]
fn test_zero_duration_package_is_rejected() {
    let err = process_sample(
        &WorkoutSample::new("RUN", [15000.0, 0.0, 75.0]),
        OutputFormat::Text,
    )
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(err.message.contains("duration"));
}

#[test]
fn test_overflowing_package_is_reported_not_rendered() {
    init_test_logging();
    let samples = vec![
        WorkoutSample::new("RUN", [15000.0, 1e-310, 75.0]),
        WorkoutSample::new("RUN", [15000.0, 1.0, 1.7e308]),
        WorkoutSample::new("RUN", [15000.0, 1.0, 75.0]),
    ];

    let mut out = Vec::new();
    let report = run_packages(&samples, &TrackerConfig::default(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(report.processed, 1);
    assert!(report
        .failures
        .iter()
        .all(|f| f.error.code == ErrorCode::ValueOutOfRange));
    assert!(!output.contains("inf"));
    assert_eq!(output.lines().collect::<Vec<_>>(), [SAMPLE_OUTPUT[1]]);
}
