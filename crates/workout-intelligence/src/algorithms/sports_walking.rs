// ABOUTME: Sports walking training with a weight and speed-over-height calorie formula
// ABOUTME: Adds the athlete's height in centimeters to the base fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::{CM_PER_METER, KMH_TO_MS, MINUTES_PER_HOUR};
use workout_core::errors::TrainingError;
use workout_core::models::ActivityCode;

use crate::physiological_constants::sports_walking::{
    SPEED_EXPONENT, SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER,
};
use crate::training::{require_positive, TrainingBase, TrainingCalculator};

const LABEL: &str = ActivityCode::SportsWalking.training_label();

/// Sports walking training
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64,
}

impl SportsWalking {
    /// Create a sports walking training
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidParameter` if `duration`, `weight` or
    /// `height` is not positive.
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::validated(LABEL, action, duration, weight)?,
            height: require_positive(LABEL, "height", height)?,
        })
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Speed-squared over height contribution per kilogram, per minute
    fn speed_height_term(&self) -> f64 {
        let speed_ms = self.mean_speed() * KMH_TO_MS;
        let height_m = self.height / CM_PER_METER;
        speed_ms.powi(SPEED_EXPONENT) / height_m * SPEED_HEIGHT_MULTIPLIER
    }
}

impl TrainingCalculator for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        LABEL
    }

    /// `(0.035 * weight + (speed_ms^2 / height_m) * 0.029 * weight) * duration * 60`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let weight = self.base.weight();
        let per_minute = WEIGHT_MULTIPLIER * weight + self.speed_height_term() * weight;
        Ok(per_minute * self.base.duration() * MINUTES_PER_HOUR)
    }
}
