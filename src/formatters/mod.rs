// ABOUTME: Output format abstraction for training summaries
// ABOUTME: Renders InfoMessage as the fixed text line (default) or as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The text format is an output contract: field order, labels, units and
//! punctuation are fixed, and all four numeric fields use three decimals.
//! The JSON format carries the same values rounded to three decimals, one
//! object per line.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use workout_core::errors::{AppError, AppResult, ErrorCode};
use workout_core::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed human-readable line (default)
    #[default]
    Text,
    /// Single-line JSON object
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unknown output format: '{other}'. Valid options: text, json"),
            )),
        }
    }
}

/// JSON view of an [`InfoMessage`] with values rounded like the text line
#[derive(Debug, Serialize)]
struct RoundedMessage<'a> {
    training_type: &'a str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl<'a> From<&'a InfoMessage> for RoundedMessage<'a> {
    fn from(message: &'a InfoMessage) -> Self {
        Self {
            training_type: &message.training_type,
            duration: round_millis(message.duration),
            distance: round_millis(message.distance),
            speed: round_millis(message.speed),
            calories: round_millis(message.calories),
        }
    }
}

fn round_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render a summary as the fixed text line
#[must_use]
pub fn render_text(message: &InfoMessage) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
        message.training_type, message.duration, message.distance, message.speed, message.calories
    )
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn format_message(message: &InfoMessage, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(message)),
        OutputFormat::Json => Ok(serde_json::to_string(&RoundedMessage::from(message))?),
    }
}
