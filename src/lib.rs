// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Wires sensor packages through the training engine to formatted summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes distance, mean speed and calories burned for running, sports
//! walking and swimming sessions from raw sensor packages, and renders one
//! summary line per session.
//!
//! ## Architecture
//!
//! - **workout-core**: errors, unit constants and data models
//! - **workout-intelligence**: the training hierarchy and the package factory
//! - **formatters**: text and JSON rendering of [`InfoMessage`] summaries
//! - **driver**: per-package pipeline with failure isolation
//! - **config** / **logging**: environment-first configuration and tracing setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use workout_tracker::driver::{run_packages, sample_packages};
//! use workout_tracker::config::TrackerConfig;
//!
//! let config = TrackerConfig::default();
//! let mut stdout = std::io::stdout();
//! let report = run_packages(&sample_packages(), &config, &mut stdout)?;
//! assert!(report.is_success());
//! # Ok::<(), workout_tracker::errors::AppError>(())
//! ```
//!
//! [`InfoMessage`]: workout_core::models::InfoMessage

/// Runtime configuration from environment and CLI
pub mod config;

/// Package processing pipeline
pub mod driver;

/// Text and JSON rendering of training summaries
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Error types re-exported from `workout-core`
pub mod errors {
    pub use workout_core::errors::*;
}

/// Data models re-exported from `workout-core`
pub mod models {
    pub use workout_core::models::*;
}

/// Training engine re-exported from `workout-intelligence`
pub mod intelligence {
    pub use workout_intelligence::*;
}
