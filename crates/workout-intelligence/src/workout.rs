// ABOUTME: Enum dispatch over the concrete training types
// ABOUTME: Lets callers hold any training by value without trait objects

//! Workout enum
//!
//! The set of trainings is closed, so the factory returns a [`Workout`]
//! rather than a boxed trait object. `Workout` itself implements
//! [`TrainingCalculator`] by delegating to the wrapped training, which keeps
//! every override (step length, speed, calories) in effect.

use workout_core::errors::TrainingError;
use workout_core::models::{ActivityCode, InfoMessage};

use crate::algorithms::{Running, SportsWalking, Swimming};
use crate::training::{TrainingBase, TrainingCalculator};

/// Any supported training
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running session
    Running(Running),
    /// Sports walking session
    SportsWalking(SportsWalking),
    /// Swimming session
    Swimming(Swimming),
}

impl Workout {
    /// Activity code of the wrapped training
    #[must_use]
    pub const fn code(&self) -> ActivityCode {
        match self {
            Self::Running(_) => ActivityCode::Running,
            Self::SportsWalking(_) => ActivityCode::SportsWalking,
            Self::Swimming(_) => ActivityCode::Swimming,
        }
    }

    fn calculator(&self) -> &dyn TrainingCalculator {
        match self {
            Self::Running(training) => training,
            Self::SportsWalking(training) => training,
            Self::Swimming(training) => training,
        }
    }
}

impl TrainingCalculator for Workout {
    fn base(&self) -> &TrainingBase {
        self.calculator().base()
    }

    fn training_type(&self) -> &'static str {
        self.calculator().training_type()
    }

    fn step_length(&self) -> f64 {
        self.calculator().step_length()
    }

    fn distance(&self) -> f64 {
        self.calculator().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.calculator().mean_speed()
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        self.calculator().spent_calories()
    }

    fn summary(&self) -> Result<InfoMessage, TrainingError> {
        self.calculator().summary()
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Self::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Self::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Self::Swimming(training)
    }
}
