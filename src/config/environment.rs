// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses network, frame geometry, landmark filtering, and default workout variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Environment-based server configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use repcount_core::constants::frame::{
    CANONICAL_HEIGHT, CANONICAL_WIDTH, DEFAULT_MIN_VISIBILITY,
};
use repcount_core::constants::ports::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use repcount_core::constants::schedule::DEFAULT_WORKOUT;
use repcount_core::errors::{AppError, AppResult};
use repcount_core::models::FrameSize;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::schedule::ScheduleEntry;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output, including repetition transitions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level shown in the startup summary
    pub log_level: LogLevel,
    /// Interface to bind
    pub http_host: String,
    /// HTTP and WebSocket port
    pub http_port: u16,
    /// Comma-separated CORS origins, `*` for any
    pub cors_allowed_origins: String,
    /// Frame normalized landmarks are scaled into
    pub frame: FrameSize,
    /// Landmarks below this visibility are treated as absent
    pub min_landmark_visibility: f32,
    /// Timeline installed at startup
    pub default_workout: Vec<ScheduleEntry>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            http_host: DEFAULT_HTTP_HOST.to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            cors_allowed_origins: "*".to_owned(),
            frame: FrameSize::default(),
            min_landmark_visibility: DEFAULT_MIN_VISIBILITY,
            default_workout: DEFAULT_WORKOUT
                .iter()
                .map(|&(exercise, secs)| ScheduleEntry::new(exercise, secs))
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is present but cannot be parsed,
    /// or if the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let default_workout = match env::var("DEFAULT_WORKOUT") {
            Ok(value) => parse_workout(&value)?,
            Err(_) => Self::default().default_workout,
        };

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            http_host: env_var_or("HTTP_HOST", DEFAULT_HTTP_HOST),
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            frame: FrameSize {
                width: parse_env("FRAME_WIDTH", CANONICAL_WIDTH)?,
                height: parse_env("FRAME_HEIGHT", CANONICAL_HEIGHT)?,
            },
            min_landmark_visibility: parse_env("MIN_LANDMARK_VISIBILITY", DEFAULT_MIN_VISIBILITY)?,
            default_workout,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero-sized frame or a visibility
    /// threshold outside `0.0..=1.0`
    pub fn validate(&self) -> AppResult<()> {
        if self.frame.width == 0 || self.frame.height == 0 {
            return Err(AppError::config(format!(
                "Frame size must be non-zero, got {}x{}",
                self.frame.width, self.frame.height
            )));
        }

        if !(0.0..=1.0).contains(&self.min_landmark_visibility) {
            return Err(AppError::config(format!(
                "MIN_LANDMARK_VISIBILITY must be between 0 and 1, got {}",
                self.min_landmark_visibility
            )));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let workout = self
            .default_workout
            .iter()
            .map(|entry| format!("{}:{}", entry.exercise, entry.duration_secs))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "Repcount Server Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - HTTP: {}:{}\n\
             - CORS Origins: {}\n\
             - Frame: {}x{}\n\
             - Min Landmark Visibility: {}\n\
             - Default Workout: {}",
            self.environment,
            self.log_level,
            self.http_host,
            self.http_port,
            self.cors_allowed_origins,
            self.frame.width,
            self.frame.height,
            self.min_landmark_visibility,
            if workout.is_empty() { "(empty)" } else { workout.as_str() },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key} value: '{value}'"))),
        Err(_) => Ok(default),
    }
}

/// Parse a `name:seconds,name:seconds` workout list
///
/// Blank items are skipped, so an empty string yields an empty workout.
///
/// # Errors
///
/// Returns `ConfigInvalid` for an item without a colon, with an empty name,
/// or with a duration that is not a whole number of seconds
pub fn parse_workout(value: &str) -> AppResult<Vec<ScheduleEntry>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (name, secs) = item.rsplit_once(':').ok_or_else(|| {
                AppError::config(format!(
                    "Invalid DEFAULT_WORKOUT item '{item}', expected name:seconds"
                ))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::config(format!(
                    "Invalid DEFAULT_WORKOUT item '{item}', exercise name is empty"
                )));
            }
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "Invalid DEFAULT_WORKOUT duration in '{item}', expected whole seconds"
                ))
            })?;
            Ok(ScheduleEntry::new(name, secs))
        })
        .collect()
}
