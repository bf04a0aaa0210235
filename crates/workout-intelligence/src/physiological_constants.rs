// ABOUTME: Formula constants for the per-activity distance, speed and calorie models
// ABOUTME: Groups step lengths, multipliers and shifts by activity

//! Formula constants for the training calculations
//!
//! Values are the calibration constants of the tracking device's published
//! formulas. They are grouped by activity so each algorithm module imports
//! only its own set.

/// Distance covered by one action
pub mod stride {
    /// Default step length in meters for running and walking
    pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;
}

/// Running calorie model
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Constant added to the scaled speed
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie model
pub mod sports_walking {
    /// Multiplier applied to body weight
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the speed-squared over height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Exponent applied to the speed in m/s
    pub const SPEED_EXPONENT: i32 = 2;
}

/// Swimming distance and calorie model
pub mod swimming {
    /// Distance in meters covered by one stroke
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Constant added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
