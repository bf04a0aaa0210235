// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Re-exports unit conversion factors used by the training formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion constants for distance and time
pub mod units;

pub use units::*;

/// Service identity used in structured logs
pub mod service_names {
    /// Binary / service name reported at startup
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}
