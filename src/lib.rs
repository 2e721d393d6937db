// ABOUTME: Main library entry point for the repcount motion-repetition server
// ABOUTME: Provides the workout engine plus its HTTP and WebSocket surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

#![deny(unsafe_code)]

//! # Repcount Server
//!
//! Counts exercise repetitions in real time from 2-D body keypoints. A
//! client streams one keypoint frame at a time; the engine looks up which
//! exercise the workout schedule says is active, runs that exercise's
//! hysteresis detector, and replies with the active exercise, its counter,
//! the seconds left in the segment, and every counter.
//!
//! ## Architecture
//!
//! - **schedule**: Ordered `(exercise, duration)` timeline and active-segment lookup
//! - **counters**: Per-exercise detector state for the whole session
//! - **engine**: Per-frame dispatch and the shared, serialized `EngineHandle`
//! - **routes**: Axum handlers for administration, frames, and WebSocket streaming
//! - **config** / **logging**: Environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use repcount_server::config::ServerConfig;
//! use repcount_server::resources::ServerResources;
//! use repcount_server::server::RepcountServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let server = RepcountServer::new(Arc::new(ServerResources::new(config)));
//!     let listener = server.bind().await?;
//!     server.run(listener).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Per-exercise detector state and counters
pub mod counters;

/// Frame dispatch and the shared engine handle
pub mod engine;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Dependencies shared by route handlers
pub mod resources;

/// HTTP and WebSocket routes
pub mod routes;

/// Workout timeline
pub mod schedule;

/// Server lifecycle
pub mod server;

pub use repcount_core::{constants, errors, models};
pub use repcount_detection as detection;
