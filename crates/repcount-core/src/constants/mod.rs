// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Frame geometry, detector thresholds, schedule defaults, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Per-exercise enter/exit thresholds
pub mod thresholds;

/// Canonical frame the keypoint coordinates are expressed in
pub mod frame {
    /// Canonical frame width in pixels
    pub const CANONICAL_WIDTH: u32 = 1280;
    /// Canonical frame height in pixels
    pub const CANONICAL_HEIGHT: u32 = 720;
    /// Landmarks with visibility below this value are dropped
    pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;
    /// Number of landmarks emitted by the pose model
    pub const POSE_LANDMARK_COUNT: usize = 33;
}

/// Workout schedule defaults
pub mod schedule {
    /// Timeline installed when no workout is configured
    pub const DEFAULT_WORKOUT: [(&str, u64); 3] =
        [("arm_raises", 30), ("jumping_jacks", 30), ("squats", 30)];
    /// Reported exercise name once the timeline is exhausted
    pub const FINISHED_EXERCISE_NAME: &str = "None";
}

/// Service naming for logging and banners
pub mod service_names {
    /// Server service name
    pub const REPCOUNT_SERVER: &str = "repcount-server";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
    /// Default bind host
    pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
}
