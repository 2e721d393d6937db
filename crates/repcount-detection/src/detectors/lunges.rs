// ABOUTME: Lunge detector tracking the knee angle of each leg independently
// ABOUTME: Left and right legs keep separate phases and counters; their sum is the reported count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::lunge::{DOWN_ANGLE_DEG, UP_ANGLE_DEG};
use repcount_core::models::{ExerciseKind, Joint, KeypointMap, Point};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::geometry::angle_deg;
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase, Side};

const fn leg(side: Side) -> [Joint; 3] {
    match side {
        Side::Left => [Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle],
        Side::Right => [Joint::RightHip, Joint::RightKnee, Joint::RightAnkle],
    }
}

/// Two-sided lunge counter
///
/// A leg whose joints are missing keeps its phase while the other leg is
/// still evaluated.
#[derive(Debug, Clone, Copy)]
pub struct LungeDetector {
    /// Knee angle below which a leg is down
    pub down_angle_deg: f64,
    /// Knee angle above which a down leg counts
    pub up_angle_deg: f64,
}

impl Default for LungeDetector {
    fn default() -> Self {
        Self {
            down_angle_deg: DOWN_ANGLE_DEG,
            up_angle_deg: UP_ANGLE_DEG,
        }
    }
}

impl LungeDetector {
    fn step_side(&self, state: DetectorState, side: Side, angle: f64) -> DetectorState {
        match state.phase(side) {
            Phase::Resting if angle < self.down_angle_deg => {
                debug!(?side, angle, "Lunge down");
                state.with_side_phase(side, Phase::Active)
            }
            Phase::Active if angle > self.up_angle_deg => {
                let state = state
                    .with_side_phase(side, Phase::Resting)
                    .count_side(side);
                debug!(?side, angle, total = state.counter.total(), "Lunge up");
                state
            }
            _ => state,
        }
    }
}

impl Detector for LungeDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Lunges
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let legs: [(Side, Option<[Point; 3]>); 2] = [
            (Side::Left, keypoints.require(leg(Side::Left))),
            (Side::Right, keypoints.require(leg(Side::Right))),
        ];
        if legs.iter().all(|(_, points)| points.is_none()) {
            return Step::unchanged(previous);
        }

        let mut state = previous;
        let mut overlay = Overlay::empty();
        for (side, points) in legs {
            let Some([hip, knee, ankle]) = points else {
                continue;
            };
            let angle = angle_deg(hip, knee, ankle);
            state = self.step_side(state, side, angle);
            overlay = overlay.measurement("knee_angle", angle, Some(knee));
        }

        Step {
            state,
            overlay: overlay.count(state.counter.total()),
        }
    }
}
