// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, unit constants and workout data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the domain-specific `TrainingError`
//! - **constants**: unit conversion constants shared by all formulas
//! - **models**: `ActivityCode`, `WorkoutSample` and `InfoMessage`

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion constants
pub mod constants;

/// Core data models (activity codes, raw samples, summary records)
pub mod models;
