// ABOUTME: Single-frame submission route handler
// ABOUTME: Runs one keypoint frame through the engine and returns the aggregated status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use repcount_core::errors::AppError;

use crate::engine::FrameInput;
use crate::logging::AppLogger;
use crate::resources::ServerResources;

/// Frame submission routes
pub struct FrameRoutes;

impl FrameRoutes {
    /// Create all frame routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/frames", post(Self::handle_frame))
            .with_state(resources)
    }

    async fn handle_frame(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<FrameInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(input) = payload.inspect_err(|e| {
            AppLogger::log_rejected_frame("http", &e.body_text());
        })?;
        let keypoints = resources.decode_frame(input).inspect_err(|e| {
            AppLogger::log_rejected_frame("http", &e.to_string());
        })?;
        let status = resources.engine.process_frame(&keypoints).await;
        Ok((StatusCode::OK, Json(status)).into_response())
    }
}
