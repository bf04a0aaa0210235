// ABOUTME: Summary record produced once per training
// ABOUTME: Holds the label and the four numeric statistics that get rendered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Informational message describing a completed training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training type label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories burned
    pub calories: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_stable() {
        let message = InfoMessage {
            training_type: "Swimming".to_owned(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["calories"], 336.0);
        assert_eq!(serde_json::from_value::<InfoMessage>(value).unwrap(), message);
    }
}
