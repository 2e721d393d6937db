// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the service banner plus liveness and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Health check routes for service monitoring
//!
//! This module provides the root banner, health, and readiness endpoints
//! for monitoring and load balancer health checks.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Banner returned by `GET /`
pub const SERVICE_BANNER: &str = "Exercise Detection API";

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn root_handler() -> Json<Value> {
            Json(json!({ "message": SERVICE_BANNER }))
        }

        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<Value> {
            Json(json!({
                "status": "ready",
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
    }
}
