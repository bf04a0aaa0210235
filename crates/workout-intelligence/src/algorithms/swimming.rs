// ABOUTME: Swimming training with pool-geometry speed and stroke-length distance
// ABOUTME: Distance and mean speed are independent overrides of the base formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::constants::METERS_PER_KM;
use workout_core::errors::TrainingError;
use workout_core::models::ActivityCode;

use crate::physiological_constants::swimming::{SPEED_SHIFT, STROKE_LENGTH_M, WEIGHT_MULTIPLIER};
use crate::training::{require_positive, TrainingBase, TrainingCalculator};

const LABEL: &str = ActivityCode::Swimming.training_label();

/// Swimming training
///
/// Distance counts strokes; mean speed counts completed pool lengths. The two
/// are measured independently and are not expected to agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming training
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidParameter` if `duration`, `weight` or
    /// `length_pool` is not a positive finite number.
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            base: TrainingBase::validated(LABEL, action, duration, weight)?,
            length_pool: require_positive(LABEL, "length_pool", length_pool)?,
            count_pool,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl TrainingCalculator for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        LABEL
    }

    fn step_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// `length_pool * count_pool / 1000 / duration`
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / METERS_PER_KM / self.base.duration()
    }

    /// `(speed + 1.1) * 2 * weight * duration`
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.mean_speed() + SPEED_SHIFT)
            * WEIGHT_MULTIPLIER
            * self.base.weight()
            * self.base.duration())
    }
}
