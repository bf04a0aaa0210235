// ABOUTME: Raw sensor package model: an activity code plus positional readings
// ABOUTME: Immutable input handed to the training factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Raw sensor package as emitted by the tracking device
///
/// The code is kept as received so that unknown codes reach the factory and
/// are reported there. Readings are positional: action count, duration in
/// hours, weight in kg, then activity-specific extras (height in cm for
/// walking; pool length in meters and pool count for swimming).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Activity code as received (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional numeric readings
    pub readings: Vec<f64>,
}

impl WorkoutSample {
    /// Create a sample from a code and its readings
    #[must_use]
    pub fn new(code: impl Into<String>, readings: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            readings: readings.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deserializes_from_device_json() {
        let sample: WorkoutSample =
            serde_json::from_str(r#"{"code": "SWM", "readings": [720, 1, 80, 25, 40]}"#).unwrap();

        assert_eq!(sample, WorkoutSample::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]));
        assert_eq!(
            serde_json::from_str::<WorkoutSample>(&serde_json::to_string(&sample).unwrap()).unwrap(),
            sample
        );
    }
}
