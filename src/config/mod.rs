// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Configuration module for the repcount server
//!
//! All settings come from environment variables, with the HTTP port
//! optionally overridden on the command line.

/// Environment and server configuration
pub mod environment;

pub use environment::{parse_workout, Environment, LogLevel, ServerConfig};
