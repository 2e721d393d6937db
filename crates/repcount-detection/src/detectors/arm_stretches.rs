// ABOUTME: Overhead arm stretch detector comparing both wrists with the nose and shoulder line
// ABOUTME: Counts when both wrists return below the shoulders after reaching over the head
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::arm_stretch::RELEASE_BELOW_SHOULDER_PX;
use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

/// Stretched when both wrists are above the nose; released once both sit
/// below the average shoulder height plus a margin
#[derive(Debug, Clone, Copy)]
pub struct ArmStretchDetector {
    /// How far below the shoulder line the wrists must drop
    pub release_below_shoulder_px: f64,
}

impl Default for ArmStretchDetector {
    fn default() -> Self {
        Self {
            release_below_shoulder_px: RELEASE_BELOW_SHOULDER_PX,
        }
    }
}

impl Detector for ArmStretchDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::ArmStretches
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some([left_wrist, right_wrist, nose, left_shoulder, right_shoulder]) = keypoints
            .require([
                Joint::LeftWrist,
                Joint::RightWrist,
                Joint::Nose,
                Joint::LeftShoulder,
                Joint::RightShoulder,
            ])
        else {
            return Step::unchanged(previous);
        };

        let release_y = left_shoulder.midpoint(right_shoulder).y + self.release_below_shoulder_px;

        let mut state = previous;
        if !previous.primary.is_active() && left_wrist.y < nose.y && right_wrist.y < nose.y {
            state = state.with_phase(Phase::Active);
            debug!("Arm stretch reached");
        } else if previous.primary.is_active()
            && left_wrist.y > release_y
            && right_wrist.y > release_y
        {
            state = state.with_phase(Phase::Resting).count();
            debug!(count = state.counter.total(), "Arm stretch released");
        }

        Step {
            state,
            overlay: Overlay::empty()
                .markers([left_wrist, right_wrist, nose, left_shoulder, right_shoulder])
                .count(state.counter.total()),
        }
    }
}
