// ABOUTME: Front toe touch detector using the distance between averaged wrists and averaged ankles
// ABOUTME: Counts when the hands come back up past the release distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::toe_touch_front::{MARGIN_PX, TOUCH_PX};
use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::geometry::distance;
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

/// Touch when the wrist midpoint comes within `touch_px` of the ankle midpoint
#[derive(Debug, Clone, Copy)]
pub struct ToeTouchFrontDetector {
    /// Touch threshold in pixels
    pub touch_px: f64,
    /// Extra distance required to release
    pub margin_px: f64,
}

impl Default for ToeTouchFrontDetector {
    fn default() -> Self {
        Self {
            touch_px: TOUCH_PX,
            margin_px: MARGIN_PX,
        }
    }
}

impl Detector for ToeTouchFrontDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::ToeTouchFront
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some([left_wrist, right_wrist, left_ankle, right_ankle]) = keypoints.require([
            Joint::LeftWrist,
            Joint::RightWrist,
            Joint::LeftAnkle,
            Joint::RightAnkle,
        ]) else {
            return Step::unchanged(previous);
        };

        let wrists = left_wrist.midpoint(right_wrist);
        let ankles = left_ankle.midpoint(right_ankle);
        let dist = distance(wrists, ankles);

        let mut state = previous;
        if !previous.primary.is_active() && dist < self.touch_px {
            state = state.with_phase(Phase::Active);
            debug!(dist, "Toe touch down");
        } else if previous.primary.is_active() && dist > self.touch_px + self.margin_px {
            state = state.with_phase(Phase::Resting).count();
            debug!(dist, count = state.counter.total(), "Toe touch up");
        }

        Step {
            state,
            overlay: Overlay::empty()
                .markers([wrists, ankles])
                .measurement("dist", dist, None)
                .count(state.counter.total()),
        }
    }
}
