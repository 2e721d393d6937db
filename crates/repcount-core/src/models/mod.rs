// ABOUTME: Core data models for the repcount engine
// ABOUTME: Joints, keypoint maps, exercise kinds with aliases, and counter values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

/// Repetition counter values and snapshots
pub mod counters;
/// Exercise kinds and alias resolution
pub mod exercise;
/// Joints and pixel points
pub mod joint;
/// Per-frame keypoint maps
pub mod keypoints;

pub use counters::{CounterSnapshot, CounterValue};
pub use exercise::ExerciseKind;
pub use joint::{Joint, Point};
pub use keypoints::{FrameSize, KeypointMap, NormalizedLandmark};
