// ABOUTME: Base training contract with generic distance and mean speed formulas
// ABOUTME: Concrete trainings implement TrainingCalculator and supply calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Base training contract
//!
//! Every training records the number of actions performed (steps or strokes),
//! the duration in hours and the athlete's weight in kilograms. Distance and
//! mean speed are derived from those fields; calories are activity specific
//! and must be provided by each concrete training.

use workout_core::constants::METERS_PER_KM;
use workout_core::errors::TrainingError;
use workout_core::models::InfoMessage;

use crate::physiological_constants::stride::DEFAULT_STEP_LENGTH_M;

/// Label reported by the bare base training
pub const BASE_TRAINING_LABEL: &str = "Training";

/// Calculation capability shared by all trainings
///
/// Default methods implement the generic formulas. Implementors override
/// [`step_length`](Self::step_length), [`mean_speed`](Self::mean_speed) or
/// [`distance`](Self::distance) when their activity measures these
/// differently, and must override [`spent_calories`](Self::spent_calories).
pub trait TrainingCalculator {
    /// Fields common to every training
    fn base(&self) -> &TrainingBase;

    /// Label used in summaries
    fn training_type(&self) -> &'static str;

    /// Distance in meters covered by one action
    fn step_length(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.base().action()) * self.step_length() / METERS_PER_KM
    }

    /// Mean speed over the whole training in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration()
    }

    /// Calories burned during the training
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::UnimplementedCalculation` unless the training
    /// overrides this method with its own formula.
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::unimplemented(
            self.training_type(),
            "spent_calories",
        ))
    }

    /// Build the summary record for this training
    ///
    /// # Errors
    ///
    /// Propagates the error from [`spent_calories`](Self::spent_calories) and
    /// returns `TrainingError::NonFiniteResult` if any statistic overflows.
    fn summary(&self) -> Result<InfoMessage, TrainingError> {
        let training_type = self.training_type();
        Ok(InfoMessage {
            training_type: training_type.to_owned(),
            duration: self.base().duration(),
            distance: require_finite(training_type, "distance", self.distance())?,
            speed: require_finite(training_type, "mean speed", self.mean_speed())?,
            calories: require_finite(training_type, "calories", self.spent_calories()?)?,
        })
    }
}

/// Fields shared by every training
///
/// Constructed through [`TrainingBase::new`] or a concrete training's
/// constructor, both of which reject a non-positive duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: u32,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    /// Create a bare training
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidParameter` if `duration` or `weight` is
    /// not a positive finite number.
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Self::validated(BASE_TRAINING_LABEL, action, duration, weight)
    }

    pub(crate) fn validated(
        training_type: &'static str,
        action: u32,
        duration: f64,
        weight: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration: require_positive(training_type, "duration", duration)?,
            weight: require_positive(training_type, "weight", weight)?,
        })
    }

    /// Number of actions (steps or strokes)
    #[must_use]
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl TrainingCalculator for TrainingBase {
    fn base(&self) -> &TrainingBase {
        self
    }

    fn training_type(&self) -> &'static str {
        BASE_TRAINING_LABEL
    }
}

/// Reject zero, negative and non-finite values
pub(crate) fn require_positive(
    training_type: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::invalid_parameter(
            training_type,
            parameter,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Reject computed statistics that overflowed to infinity or became NaN
fn require_finite(
    training_type: &'static str,
    quantity: &'static str,
    value: f64,
) -> Result<f64, TrainingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrainingError::non_finite(training_type, quantity, value))
    }
}

/// Convert a reading into a whole count
pub(crate) fn require_count(
    training_type: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<u32, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::invalid_parameter(
            training_type,
            parameter,
            format!("must be a non-negative whole number, got {value}"),
        ))
    }
}
