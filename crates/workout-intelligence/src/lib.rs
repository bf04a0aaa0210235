// ABOUTME: Training calculation engine for the workout tracker
// ABOUTME: Distance, mean speed and calorie formulas per activity with enum-dispatched workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Intelligence
//!
//! The calculation core of the workout tracker. A [`TrainingCalculator`]
//! trait carries the generic distance and speed formulas; the concrete
//! trainings in [`algorithms`] supply their own calorie formulas and override
//! distance or speed where their physics differ. [`read_package`] turns a raw
//! sensor package into an enum-dispatched [`Workout`].

/// Concrete training types (running, sports walking, swimming)
pub mod algorithms;

/// Activity-code factory for raw sensor packages
pub mod factory;

/// Formula constants for each activity
pub mod physiological_constants;

/// Base training contract and shared fields
pub mod training;

/// Enum dispatch over the concrete training types
pub mod workout;

pub use algorithms::{Running, SportsWalking, Swimming};
pub use factory::{read_package, read_sample};
pub use training::{TrainingBase, TrainingCalculator};
pub use workout::Workout;
