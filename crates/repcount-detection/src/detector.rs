// ABOUTME: Detector capability implemented once per exercise kind
// ABOUTME: A pure step from (keypoints, previous state) to (next state, overlay hints)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::models::{ExerciseKind, KeypointMap};

use crate::overlay::Overlay;
use crate::state::DetectorState;

/// Result of feeding one frame to a detector
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// State to persist for the next frame
    pub state: DetectorState,
    /// Rendering hints for this frame
    pub overlay: Overlay,
}

impl Step {
    /// No transition and no hints; used when required joints are missing
    #[must_use]
    pub const fn unchanged(state: DetectorState) -> Self {
        Self {
            state,
            overlay: Overlay::empty(),
        }
    }
}

/// Repetition counter for one exercise
///
/// Implementations hold only thresholds, never per-session state; the
/// previous state is passed in and the next one returned, so one detector
/// instance can be shared freely.
///
/// When a joint the detector needs is absent from `keypoints`, `step` must
/// return [`Step::unchanged`]: missing data is never read as a zero value.
pub trait Detector: Send + Sync {
    /// Exercise this detector counts
    fn kind(&self) -> ExerciseKind;

    /// Advance the state machine by one frame
    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step;
}
