// ABOUTME: Squat detector driven by the right hip-knee-ankle angle
// ABOUTME: Down below the down angle, counted when the knee straightens past the up angle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::squat::{DOWN_ANGLE_DEG, UP_ANGLE_DEG};
use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::geometry::angle_deg;
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

/// Right-leg squat counter
#[derive(Debug, Clone, Copy)]
pub struct SquatDetector {
    /// Knee angle below which the squat is down
    pub down_angle_deg: f64,
    /// Knee angle above which a down squat counts
    pub up_angle_deg: f64,
}

impl Default for SquatDetector {
    fn default() -> Self {
        Self {
            down_angle_deg: DOWN_ANGLE_DEG,
            up_angle_deg: UP_ANGLE_DEG,
        }
    }
}

impl Detector for SquatDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Squats
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some([hip, knee, ankle]) =
            keypoints.require([Joint::RightHip, Joint::RightKnee, Joint::RightAnkle])
        else {
            return Step::unchanged(previous);
        };

        let angle = angle_deg(hip, knee, ankle);
        let mut state = previous;
        let mut overlay = Overlay::empty().measurement("knee_angle", angle, Some(knee));

        if angle < self.down_angle_deg {
            if !state.primary.is_active() {
                debug!(angle, "Squat down");
            }
            state = state.with_phase(Phase::Active);
            overlay = overlay.status("Down");
        }
        if state.primary.is_active() && angle > self.up_angle_deg {
            state = state.with_phase(Phase::Resting).count();
            overlay = overlay.status("Up");
            debug!(angle, count = state.counter.total(), "Squat up");
        }

        Step {
            state,
            overlay: overlay.count(state.counter.total()),
        }
    }
}
