// ABOUTME: Arm raise detector comparing right elbow height with right shoulder height
// ABOUTME: The only detector that counts on entering the active phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::arm_raise::RAISE_MARGIN_PX;
use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

/// Counts a repetition the moment the right elbow rises clearly above the shoulder
///
/// Enter: `elbow_y + margin < shoulder_y` while resting (counts).
/// Exit: `elbow_y > shoulder_y`, from any phase.
#[derive(Debug, Clone, Copy)]
pub struct ArmRaiseDetector {
    /// Pixels the elbow must clear above the shoulder
    pub raise_margin_px: f64,
}

impl Default for ArmRaiseDetector {
    fn default() -> Self {
        Self {
            raise_margin_px: RAISE_MARGIN_PX,
        }
    }
}

impl Detector for ArmRaiseDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::ArmRaise
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some([shoulder, elbow]) = keypoints.require([Joint::RightShoulder, Joint::RightElbow])
        else {
            return Step::unchanged(previous);
        };

        let mut state = previous;
        if !previous.primary.is_active() && elbow.y + self.raise_margin_px < shoulder.y {
            state = state.with_phase(Phase::Active).count();
            debug!(count = state.counter.total(), "Arm raise up");
        } else if elbow.y > shoulder.y {
            state = state.with_phase(Phase::Resting);
        }

        Step {
            state,
            overlay: Overlay::empty()
                .markers([shoulder, elbow])
                .count(state.counter.total()),
        }
    }
}
