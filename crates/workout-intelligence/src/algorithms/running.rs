// ABOUTME: Running training with a speed-scaled calorie formula
// ABOUTME: Uses the generic stride-based distance and mean speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::{METERS_PER_KM, MINUTES_PER_HOUR};
use workout_core::errors::TrainingError;
use workout_core::models::ActivityCode;

use crate::physiological_constants::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use crate::training::{TrainingBase, TrainingCalculator};

const LABEL: &str = ActivityCode::Running.training_label();

/// Running training
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Create a running training
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidParameter` if `duration` or `weight`
    /// is not positive.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::validated(LABEL, action, duration, weight)?,
        })
    }
}

impl TrainingCalculator for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        LABEL
    }

    /// `(18 * speed + 1.79) * weight / 1000 * duration * 60`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let rate = SPEED_MULTIPLIER * self.mean_speed() + SPEED_SHIFT;
        Ok(rate * self.base.weight() / METERS_PER_KM * self.base.duration() * MINUTES_PER_HOUR)
    }
}
