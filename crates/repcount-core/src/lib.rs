// ABOUTME: Core types and constants for the repcount motion-counting engine
// ABOUTME: Foundation crate with error handling, keypoint models, exercise kinds, and thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

#![deny(unsafe_code)]

//! # Repcount Core
//!
//! Foundation crate providing shared types and constants for the repcount
//! repetition-counting engine. This crate is designed to change infrequently,
//! so the detector crate and the server can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Frame geometry, detector thresholds, and service defaults
//! - **models**: Joints, keypoint maps, exercise kinds, and counter values

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (joints, keypoints, exercises, counters)
pub mod models;
