// ABOUTME: Workout schedule route handlers
// ABOUTME: Installs a new timeline and reports the current one with its active exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use repcount_core::errors::AppError;
use serde::{Deserialize, Serialize};

use crate::resources::ServerResources;
use crate::schedule::ScheduleView;

/// Body of `POST /set_schedule`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetScheduleRequest {
    /// Segment durations in seconds
    pub time_intervals: Vec<u64>,
    /// Exercise names, one per duration
    pub exercises: Vec<String>,
}

/// Reply to `POST /set_schedule`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetScheduleResponse {
    /// Confirmation message
    pub message: String,
    /// The timeline just installed
    pub schedule: ScheduleView,
}

/// Schedule routes
pub struct ScheduleRoutes;

impl ScheduleRoutes {
    /// Create all schedule routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/set_schedule", post(Self::handle_set_schedule))
            .route("/current_schedule", get(Self::handle_current_schedule))
            .with_state(resources)
    }

    /// Replace the timeline; counters are not touched
    async fn handle_set_schedule(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<SetScheduleRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload?;
        let schedule = resources
            .engine
            .reschedule(request.time_intervals, request.exercises)
            .await?;

        let response = SetScheduleResponse {
            message: "Schedule updated successfully".to_owned(),
            schedule,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_current_schedule(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let view = resources.engine.schedule_view().await;
        Ok((StatusCode::OK, Json(view)).into_response())
    }
}
