// ABOUTME: Activity-code factory turning raw sensor packages into trainings
// ABOUTME: Binds positional readings to named constructor fields per activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor package factory
//!
//! A package is an activity code plus positional readings. The code selects
//! the training; the readings are destructured by slice pattern into named
//! fields (action, duration, weight, then the activity's extras), so an
//! arity mismatch is reported as an error instead of being splatted blindly.

use tracing::debug;
use workout_core::errors::TrainingError;
use workout_core::models::{ActivityCode, WorkoutSample};

use crate::algorithms::{Running, SportsWalking, Swimming};
use crate::training::require_count;
use crate::workout::Workout;

/// Build a training from an activity code and its positional readings
///
/// # Errors
///
/// - `TrainingError::UnknownActivityCode` if `code` is not `SWM`, `RUN` or `WLK`
/// - `TrainingError::ArgumentArityMismatch` if `readings` has the wrong length
/// - `TrainingError::InvalidParameter` if a reading is outside the formulas' domain
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout, TrainingError> {
    let activity: ActivityCode = code.parse()?;
    let label = activity.training_label();

    let workout: Workout = match (activity, readings) {
        (ActivityCode::Running, &[action, duration, weight]) => {
            Running::new(require_count(label, "action", action)?, duration, weight)?.into()
        }
        (ActivityCode::SportsWalking, &[action, duration, weight, height]) => SportsWalking::new(
            require_count(label, "action", action)?,
            duration,
            weight,
            height,
        )?
        .into(),
        (ActivityCode::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                require_count(label, "action", action)?,
                duration,
                weight,
                length_pool,
                require_count(label, "count_pool", count_pool)?,
            )?
            .into()
        }
        (activity, readings) => {
            return Err(TrainingError::arity_mismatch(activity, readings.len()));
        }
    };

    debug!(code = %activity, readings = readings.len(), "Built training from sensor package");
    Ok(workout)
}

/// Build a training from a [`WorkoutSample`]
///
/// # Errors
///
/// Same as [`read_package`].
pub fn read_sample(sample: &WorkoutSample) -> Result<Workout, TrainingError> {
    read_package(&sample.code, &sample.readings)
}
