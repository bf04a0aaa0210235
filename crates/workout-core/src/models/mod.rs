// ABOUTME: Core data models for the workout tracker
// ABOUTME: Activity codes, raw sensor samples and the rendered summary record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity code enumeration (`SWM`, `RUN`, `WLK`)
pub mod activity;

/// Summary record produced once per training
pub mod info_message;

/// Raw sensor packages
pub mod sample;

pub use activity::ActivityCode;
pub use info_message::InfoMessage;
pub use sample::WorkoutSample;
