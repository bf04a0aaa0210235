// ABOUTME: Integration tests for the activity-code factory
// ABOUTME: Covers dispatch by code, arity errors and reading validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_core::errors::TrainingError;
use workout_core::models::{ActivityCode, WorkoutSample};
use workout_intelligence::{read_package, read_sample, Swimming, TrainingCalculator, Workout};

#[test]
fn test_codes_dispatch_to_matching_training() {
    let cases = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], ActivityCode::Swimming, "Swimming"),
        ("RUN", vec![15000.0, 1.0, 75.0], ActivityCode::Running, "Running"),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0], ActivityCode::SportsWalking, "SportsWalking"),
    ];

    for (code, readings, expected_code, label) in cases {
        let workout = read_package(code, &readings).unwrap();
        assert_eq!(workout.code(), expected_code);
        assert_eq!(workout.training_type(), label);
        assert_eq!(workout.summary().unwrap().training_type, label);
    }
}

#[test]
fn test_readings_bind_in_declaration_order() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let expected = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();

    assert_eq!(workout, Workout::Swimming(expected));
    assert_eq!(workout.base().action(), 720);
    assert!((workout.base().weight() - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_workout_keeps_swimming_overrides() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    assert!((workout.step_length() - 1.38).abs() < f64::EPSILON);
    assert!((workout.mean_speed() - 1.0).abs() < 1e-12);
    assert!((workout.spent_calories().unwrap() - 336.0).abs() < 1e-9);
}

#[test]
fn test_unknown_code_is_reported_by_name() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();

    assert_eq!(
        err,
        TrainingError::UnknownActivityCode {
            code: "XYZ".to_owned()
        }
    );
    assert!(err.to_string().contains("'XYZ'"));
}

#[test]
fn test_unknown_code_wins_over_arity() {
    let err = read_package("", &[]).unwrap_err();
    assert!(matches!(err, TrainingError::UnknownActivityCode { .. }));
}

#[test]
fn test_arity_mismatch_names_expected_count() {
    let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        TrainingError::ArgumentArityMismatch {
            code: ActivityCode::Running,
            expected: 3,
            actual: 2,
        }
    );

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SWM expects 5 values (action, duration, weight, pool length, pool count), got 4"
    );

    let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        TrainingError::ArgumentArityMismatch {
            expected: 4,
            actual: 5,
            ..
        }
    ));
}

#[test]
fn test_fractional_action_is_rejected() {
    let err = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
    assert!(matches!(
        err,
        TrainingError::InvalidParameter {
            training_type: "Running",
            parameter: "action",
            ..
        }
    ));
}

#[test]
fn test_zero_duration_is_rejected() {
    let err = read_package("WLK", &[9000.0, 0.0, 75.0, 180.0]).unwrap_err();
    assert!(matches!(
        err,
        TrainingError::InvalidParameter {
            parameter: "duration",
            ..
        }
    ));
}

#[test]
fn test_read_sample_uses_code_and_readings() {
    let sample = WorkoutSample::new("RUN", [15000.0, 1.0, 75.0]);
    let workout = read_sample(&sample).unwrap();
    assert_eq!(workout.code(), ActivityCode::Running);
}
