// ABOUTME: Exercise catalog route handler
// ABOUTME: Lists every accepted exercise spelling for schedule authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use axum::{routing::get, Json, Router};
use repcount_core::models::ExerciseKind;
use serde::{Deserialize, Serialize};

/// Reply to `GET /available_exercises`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableExercisesResponse {
    /// Every recognized alias, canonical keys included
    pub available_exercises: Vec<String>,
}

/// Exercise catalog routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise catalog routes
    pub fn routes() -> Router {
        Router::new().route("/available_exercises", get(Self::handle_available_exercises))
    }

    async fn handle_available_exercises() -> Json<AvailableExercisesResponse> {
        Json(AvailableExercisesResponse {
            available_exercises: ExerciseKind::aliases().map(str::to_owned).collect(),
        })
    }
}
