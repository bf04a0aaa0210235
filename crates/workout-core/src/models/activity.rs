// ABOUTME: Activity code enumeration for sensor packages
// ABOUTME: Maps the three-letter device codes to training labels and payload arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TrainingError;

/// Activity code attached to every sensor package
///
/// Codes are exact, case-sensitive three-letter tokens as emitted by the
/// tracking device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    /// Swimming session (`SWM`)
    #[serde(rename = "SWM")]
    Swimming,
    /// Running session (`RUN`)
    #[serde(rename = "RUN")]
    Running,
    /// Sports walking session (`WLK`)
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl ActivityCode {
    /// All known codes, in the order the device documents them
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Three-letter wire code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Training type label shown in summaries
    #[must_use]
    pub const fn training_label(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of payload values the training constructor binds
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Comma-prefixed list of the fields that follow `weight`, for error messages
    #[must_use]
    pub const fn extra_fields_hint(&self) -> &'static str {
        match self {
            Self::Running => "",
            Self::SportsWalking => ", height",
            Self::Swimming => ", pool length, pool count",
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::SportsWalking),
            other => Err(TrainingError::unknown_activity_code(other)),
        }
    }
}
