// ABOUTME: Route module organization for the repcount server HTTP and WebSocket endpoints
// ABOUTME: Provides per-domain route definitions and the assembled application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Route module for the repcount server
//!
//! Each domain module contains only route definitions and thin handlers
//! that delegate to the shared [`EngineHandle`](crate::engine::EngineHandle).

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::setup_cors;
use crate::resources::ServerResources;

/// Counter read and reset routes
pub mod counters;
/// Exercise catalog routes
pub mod exercises;
/// Single-frame submission routes
pub mod frames;
/// Health check and banner routes
pub mod health;
/// Workout schedule routes
pub mod schedule;
/// WebSocket frame streaming routes
pub mod websocket;

pub use counters::CounterRoutes;
pub use exercises::ExerciseRoutes;
pub use frames::FrameRoutes;
pub use health::HealthRoutes;
pub use schedule::ScheduleRoutes;
pub use websocket::WebSocketRoutes;

/// Assemble every route with request tracing and CORS
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ExerciseRoutes::routes())
        .merge(ScheduleRoutes::routes(Arc::clone(&resources)))
        .merge(CounterRoutes::routes(Arc::clone(&resources)))
        .merge(FrameRoutes::routes(Arc::clone(&resources)))
        .merge(WebSocketRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
