// ABOUTME: Unified error handling with standard error codes for the repcount engine
// ABOUTME: Defines ErrorCode, AppError, AppResult and the JSON error response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! # Unified Error Handling System
//!
//! Every failure that reaches a caller is an explicit `AppError` carrying an
//! `ErrorCode`. Ordinary absence of data (missing landmarks, unknown exercise
//! names) is not an error and never flows through this module.

/// Frame payload errors
pub mod frame;
/// Workout schedule errors
pub mod schedule;

#[cfg(feature = "http-response")]
mod http;

pub use frame::FrameError;
pub use schedule::ScheduleError;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Exercise and duration lists do not line up
    #[serde(rename = "INVALID_SCHEDULE")]
    InvalidSchedule = 3001,
    /// Frame payload could not be interpreted
    #[serde(rename = "INVALID_FRAME")]
    InvalidFrame = 3002,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization of a response failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidSchedule | Self::InvalidFrame => 400,
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidSchedule => "The workout schedule is invalid",
            Self::InvalidFrame => "The frame payload could not be interpreted",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Failed to serialize the response",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error with a standard code and a human readable message
#[derive(Debug)]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Message for the caller
    pub message: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

impl From<ScheduleError> for AppError {
    fn from(error: ScheduleError) -> Self {
        Self::new(ErrorCode::InvalidSchedule, error.to_string())
    }
}

impl From<FrameError> for AppError {
    fn from(error: FrameError) -> Self {
        Self::new(ErrorCode::InvalidFrame, error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// JSON body returned to HTTP callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidSchedule.http_status(), 400);
        assert_eq!(ErrorCode::InvalidFrame.http_status(), 400);
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_schedule_error_maps_to_invalid_schedule() {
        let error: AppError = ScheduleError::LengthMismatch {
            exercises: 2,
            durations: 3,
        }
        .into();
        assert_eq!(error.code, ErrorCode::InvalidSchedule);
        assert!(error.message.contains('2'));
        assert!(error.message.contains('3'));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::invalid_input("bad"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_INPUT"));
        assert!(json.contains("bad"));
    }
}
