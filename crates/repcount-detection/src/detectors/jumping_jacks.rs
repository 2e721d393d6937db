// ABOUTME: Jumping jack detector requiring raised wrists and knees spread wider than hips
// ABOUTME: Counts when the open position closes again
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

const REQUIRED: [Joint; 8] = [
    Joint::LeftWrist,
    Joint::RightWrist,
    Joint::LeftShoulder,
    Joint::RightShoulder,
    Joint::LeftHip,
    Joint::RightHip,
    Joint::LeftKnee,
    Joint::RightKnee,
];

/// Open when both wrists are above their shoulders and the knees are spread
/// wider than the hips; a repetition is counted when either condition fails
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpingJackDetector;

impl Detector for JumpingJackDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::JumpingJacks
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some(
            [left_wrist, right_wrist, left_shoulder, right_shoulder, left_hip, right_hip, left_knee, right_knee],
        ) = keypoints.require(REQUIRED)
        else {
            return Step::unchanged(previous);
        };

        let arms_up = left_wrist.y < left_shoulder.y && right_wrist.y < right_shoulder.y;
        let knee_spread = (left_knee.x - right_knee.x).abs();
        let hip_spread = (left_hip.x - right_hip.x).abs();
        let open = arms_up && knee_spread > hip_spread;

        let mut state = previous;
        match (previous.primary, open) {
            (Phase::Resting, true) => {
                state = state.with_phase(Phase::Active);
                debug!("Jumping jack open");
            }
            (Phase::Active, false) => {
                state = state.with_phase(Phase::Resting).count();
                debug!(count = state.counter.total(), "Jumping jack closed");
            }
            _ => {}
        }

        Step {
            state,
            overlay: Overlay::empty()
                .measurement("knee_spread", knee_spread, None)
                .measurement("hip_spread", hip_spread, None)
                .count(state.counter.total()),
        }
    }
}
