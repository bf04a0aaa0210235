// ABOUTME: Training-specific error types for the calculation hierarchy and factory
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Error Types
//!
//! Errors raised while turning a raw sensor package into a training and while
//! computing its statistics. Each package is processed independently, so these
//! errors are terminal for one workout only.

use thiserror::Error;

use super::ErrorCode;
use crate::models::ActivityCode;

/// Errors specific to training construction and calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// The activity code is not one of the known codes
    #[error("Unknown activity code '{code}'. Valid codes: SWM, RUN, WLK")]
    UnknownActivityCode {
        /// Code as received from the sensor package
        code: String,
    },

    /// The payload length does not match the training's field count
    #[error(
        "{code} expects {expected} values (action, duration, weight{extras}), got {actual}",
        extras = .code.extra_fields_hint()
    )]
    ArgumentArityMismatch {
        /// Activity the payload was addressed to
        code: ActivityCode,
        /// Number of fields the training requires
        expected: usize,
        /// Number of fields received
        actual: usize,
    },

    /// A calculation was requested from a training that does not define it
    #[error("{training_type} does not implement {calculation}")]
    UnimplementedCalculation {
        /// Label of the training type
        training_type: &'static str,
        /// Name of the missing calculation
        calculation: &'static str,
    },

    /// A payload field is outside the domain of the formulas
    #[error("Invalid {parameter} for {training_type}: {reason}")]
    InvalidParameter {
        /// Label of the training type
        training_type: &'static str,
        /// Name of the offending field
        parameter: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A computed statistic overflowed or is otherwise not a finite number
    #[error("{training_type} {quantity} is not a finite number ({value})")]
    NonFiniteResult {
        /// Label of the training type
        training_type: &'static str,
        /// Name of the computed statistic
        quantity: &'static str,
        /// Value that was computed
        value: f64,
    },
}

impl TrainingError {
    /// Create an "unknown activity code" error
    #[must_use]
    pub fn unknown_activity_code(code: impl Into<String>) -> Self {
        Self::UnknownActivityCode { code: code.into() }
    }

    /// Create an "argument arity mismatch" error for `code`
    #[must_use]
    pub const fn arity_mismatch(code: ActivityCode, actual: usize) -> Self {
        Self::ArgumentArityMismatch {
            code,
            expected: code.arity(),
            actual,
        }
    }

    /// Create an "unimplemented calculation" error
    #[must_use]
    pub const fn unimplemented(training_type: &'static str, calculation: &'static str) -> Self {
        Self::UnimplementedCalculation {
            training_type,
            calculation,
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        training_type: &'static str,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            training_type,
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a "non-finite result" error
    #[must_use]
    pub const fn non_finite(training_type: &'static str, quantity: &'static str, value: f64) -> Self {
        Self::NonFiniteResult {
            training_type,
            quantity,
            value,
        }
    }

    /// Standard error code for this error
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownActivityCode { .. } => ErrorCode::ResourceNotFound,
            Self::ArgumentArityMismatch { .. } => ErrorCode::InvalidFormat,
            Self::UnimplementedCalculation { .. } => ErrorCode::NotImplemented,
            Self::InvalidParameter { .. } | Self::NonFiniteResult { .. } => {
                ErrorCode::ValueOutOfRange
            }
        }
    }
}
