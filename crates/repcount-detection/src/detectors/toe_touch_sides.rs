// ABOUTME: Crossed toe touch detector measuring each wrist against the opposite ankle
// ABOUTME: Either hand may touch; both hands must clear the release distance to count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::toe_touch_sides::{MARGIN_PX, TOUCH_PX};
use repcount_core::models::{ExerciseKind, Joint, KeypointMap};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::geometry::distance;
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

/// Alternating crossed toe touch counter
#[derive(Debug, Clone, Copy)]
pub struct ToeTouchSidesDetector {
    /// Touch threshold in pixels
    pub touch_px: f64,
    /// Extra distance both hands need to release
    pub margin_px: f64,
}

impl Default for ToeTouchSidesDetector {
    fn default() -> Self {
        Self {
            touch_px: TOUCH_PX,
            margin_px: MARGIN_PX,
        }
    }
}

impl Detector for ToeTouchSidesDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::ToeTouchesSides
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

        let left_reach = distance(left_wrist, right_ankle);
        let right_reach = distance(right_wrist, left_ankle);
        let release = self.touch_px + self.margin_px;

        let mut state = previous;
        if !previous.primary.is_active() && left_reach.min(right_reach) < self.touch_px {
            state = state.with_phase(Phase::Active);
            debug!(left_reach, right_reach, "Crossed toe touch");
        } else if previous.primary.is_active() && left_reach > release && right_reach > release {
            state = state.with_phase(Phase::Resting).count();
            debug!(count = state.counter.total(), "Crossed toe touch released");
        }

        Step {
            state,
            overlay: Overlay::empty()
                .markers([left_wrist, right_wrist, left_ankle, right_ankle])
                .measurement("left_reach", left_reach, None)
                .measurement("right_reach", right_reach, None)
                .count(state.counter.total()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::testing::run;
    use crate::test_utils::{standing_pose, without};
    use repcount_core::models::{CounterValue, Point};

    fn left_hand_at(x: f64, y: f64) -> KeypointMap {
        standing_pose().with(Joint::LeftWrist, Point::new(x, y))
    }

    #[test]
    fn test_either_hand_touches_then_release_counts() {
        let right_touch = standing_pose().with(Joint::RightWrist, Point::new(670.0, 660.0));
        let state = run(
            &ToeTouchSidesDetector::default(),
            &[standing_pose(), right_touch, standing_pose()],
        );
        assert_eq!(state.counter, CounterValue::Scalar(1));
    }

    #[test]
    fn test_release_requires_both_hands_clear() {
        // Left hand hovers between the touch and release distances
        let state = run(
            &ToeTouchSidesDetector::default(),
            &[left_hand_at(610.0, 650.0), left_hand_at(600.0, 580.0)],
        );
        assert_eq!(state.counter, CounterValue::Scalar(0));
        assert!(state.primary.is_active());
    }

    #[test]
    fn test_alternating_touches_count_each() {
        let right_touch = standing_pose().with(Joint::RightWrist, Point::new(670.0, 660.0));
        let state = run(
            &ToeTouchSidesDetector::default(),
            &[
                left_hand_at(610.0, 650.0),
                standing_pose(),
                right_touch,
                standing_pose(),
            ],
        );
        assert_eq!(state.counter, CounterValue::Scalar(2));
    }

    #[test]
    fn test_missing_wrist_is_noop() {
        let previous = run(&ToeTouchSidesDetector::default(), &[left_hand_at(610.0, 650.0)]);
        let step = ToeTouchSidesDetector::default()
            .step(&without(standing_pose(), &[Joint::RightWrist]), previous);
        assert_eq!(step.state, previous);
        assert!(step.overlay.is_empty());
    }
}
