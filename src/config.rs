// ABOUTME: Runtime configuration for the workout tracker driver
// ABOUTME: Environment-first settings that CLI flags may override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `WORKOUT_OUTPUT_FORMAT` | `text` or `json` | `text` |
//! | `WORKOUT_FAIL_FAST` | stop at the first failing package | `false` |

use std::env;

use tracing::debug;
use workout_core::errors::{AppError, AppResult, ErrorCode};

use crate::formatters::OutputFormat;

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_ENV: &str = "WORKOUT_OUTPUT_FORMAT";

/// Environment variable enabling fail-fast processing
pub const FAIL_FAST_ENV: &str = "WORKOUT_FAIL_FAST";

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// Format of each summary line
    pub output_format: OutputFormat,
    /// Halt on the first failing package instead of continuing
    pub fail_fast: bool,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an
    /// unrecognized value
    pub fn from_env() -> AppResult<Self> {
        let output_format = match env::var(OUTPUT_FORMAT_ENV) {
            Ok(value) => value.parse::<OutputFormat>()?,
            Err(_) => OutputFormat::default(),
        };

        let fail_fast = match env::var(FAIL_FAST_ENV) {
            Ok(value) => parse_flag(FAIL_FAST_ENV, &value)?,
            Err(_) => false,
        };

        let config = Self {
            output_format,
            fail_fast,
        };
        debug!(?config, "Loaded tracker configuration from environment");
        Ok(config)
    }

    /// Apply CLI overrides on top of this configuration
    #[must_use]
    pub fn with_overrides(mut self, output_format: Option<OutputFormat>, fail_fast: bool) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self.fail_fast |= fail_fast;
        self
    }
}

fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("{name} must be a boolean (true/false), got '{other}'"),
        )),
    }
}
