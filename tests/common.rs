// ABOUTME: Shared test utilities for workout tracker integration tests
// ABOUTME: Provides quiet logging setup and sample summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]
//! Shared test utilities for `workout_tracker`

use std::sync::Once;
use workout_tracker::models::InfoMessage;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Build a summary record without going through a training
pub fn info_message(
    training_type: &str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
) -> InfoMessage {
    InfoMessage {
        training_type: training_type.to_owned(),
        duration,
        distance,
        speed,
        calories,
    }
}

/// Expected text output for the bundled sample packages, in order
pub const SAMPLE_OUTPUT: [&str; 3] = [
    "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000.",
    "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 797.805.",
    "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg. speed: 5.850 km/h; Calories burned: 349.252.",
];
