// ABOUTME: Repetition detection library for the repcount engine
// ABOUTME: Nine hysteresis state machines over 2-D keypoints plus the registry that dispatches to them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

#![deny(unsafe_code)]

//! # Repcount Detection
//!
//! Each exercise is counted by a [`Detector`]: a pure step function from the
//! current frame's keypoints and the previous [`DetectorState`] to the next
//! state plus optional overlay hints. Every detector is a hysteresis machine
//! with distinct enter and exit thresholds, so a signal hovering around one
//! threshold cannot count a repetition twice.
//!
//! The [`DetectorRegistry`] maps the closed [`ExerciseKind`] enumeration to
//! one detector each, so adding an exercise is a compile-time exhaustive
//! change.
//!
//! [`ExerciseKind`]: repcount_core::models::ExerciseKind

/// The detector capability
pub mod detector;
/// The nine exercise detectors
pub mod detectors;
/// Angle and distance primitives
pub mod geometry;
/// Rendering hints emitted alongside state transitions
pub mod overlay;
/// Lookup from exercise kind to detector
pub mod registry;
/// Phase flags and per-exercise detector state
pub mod state;
/// Pose builders shared by unit tests, integration tests, and benchmarks
pub mod test_utils;

pub use detector::{Detector, Step};
pub use overlay::{Overlay, OverlayHint};
pub use registry::DetectorRegistry;
pub use state::{DetectorState, Phase, Side};
