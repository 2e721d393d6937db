// ABOUTME: Test utilities for building server resources and frame payloads
// ABOUTME: Provides deterministic configuration and JSON bodies for route tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use axum::Router;
use repcount_server::config::{Environment, ServerConfig};
use repcount_server::models::KeypointMap;
use repcount_server::resources::ServerResources;
use repcount_server::routes;
use repcount_server::schedule::ScheduleEntry;
use serde_json::{json, Value};

/// Configuration used by route tests: testing environment, given workout
#[must_use]
pub fn test_config(workout: &[(&str, u64)]) -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        default_workout: workout
            .iter()
            .map(|&(exercise, secs)| ScheduleEntry::new(exercise, secs))
            .collect(),
        ..ServerConfig::default()
    }
}

/// Shared resources whose workout starts now
#[must_use]
pub fn test_resources(workout: &[(&str, u64)]) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(test_config(workout)))
}

/// Full application router plus the resources behind it
#[must_use]
pub fn test_app(workout: &[(&str, u64)]) -> (Router, Arc<ServerResources>) {
    let resources = test_resources(workout);
    (routes::router(Arc::clone(&resources)), resources)
}

/// `{"keypoints": ...}` frame body
#[must_use]
pub fn keypoints_body(keypoints: &KeypointMap) -> Value {
    json!({ "keypoints": keypoints })
}
