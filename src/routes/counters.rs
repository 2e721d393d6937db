// ABOUTME: Counter route handlers
// ABOUTME: Reads every repetition counter and resets them all to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use repcount_core::errors::AppError;
use repcount_core::models::CounterSnapshot;
use serde::{Deserialize, Serialize};

use crate::resources::ServerResources;

/// Reply to `POST /reset_counters`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetCountersResponse {
    /// Confirmation message
    pub message: String,
    /// Counters after the reset
    pub counters: CounterSnapshot,
}

/// Counter routes
pub struct CounterRoutes;

impl CounterRoutes {
    /// Create all counter routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/counters", get(Self::handle_counters))
            .route("/reset_counters", post(Self::handle_reset_counters))
            .with_state(resources)
    }

    async fn handle_counters(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let counters = resources.engine.counters().await;
        Ok((StatusCode::OK, Json(counters)).into_response())
    }

    async fn handle_reset_counters(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let counters = resources.engine.reset_counters().await;
        let response = ResetCountersResponse {
            message: "All counters reset to zero".to_owned(),
            counters,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
