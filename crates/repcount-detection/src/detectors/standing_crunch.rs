// ABOUTME: Standing crunch detectors (cross and side variants) gated on an upright torso
// ABOUTME: Leaving the standing posture forces the resting phase without counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::constants::thresholds::{cross_crunch, side_crunch};
use repcount_core::models::{ExerciseKind, Joint, KeypointMap, Point};
use tracing::debug;

use crate::detector::{Detector, Step};
use crate::geometry::{distance, is_standing};
use crate::overlay::Overlay;
use crate::state::{DetectorState, Phase};

const NOT_STANDING: &str = "Not Standing";

const REQUIRED: [Joint; 8] = [
    Joint::LeftElbow,
    Joint::RightElbow,
    Joint::LeftKnee,
    Joint::RightKnee,
    Joint::LeftShoulder,
    Joint::RightShoulder,
    Joint::LeftHip,
    Joint::RightHip,
];

/// Elbow and knee positions of one frame plus the posture gate
struct CrunchPose {
    left_elbow: Point,
    right_elbow: Point,
    left_knee: Point,
    right_knee: Point,
    standing: bool,
}

impl CrunchPose {
    fn from_keypoints(keypoints: &KeypointMap) -> Option<Self> {
        let [left_elbow, right_elbow, left_knee, right_knee, left_shoulder, right_shoulder, left_hip, right_hip] =
            keypoints.require(REQUIRED)?;
        Some(Self {
            left_elbow,
            right_elbow,
            left_knee,
            right_knee,
            standing: is_standing(left_shoulder, right_shoulder, left_hip, right_hip),
        })
    }

    fn same_side(&self) -> (f64, f64) {
        (
            distance(self.left_elbow, self.left_knee),
            distance(self.right_elbow, self.right_knee),
        )
    }

    fn cross_side(&self) -> (f64, f64) {
        (
            distance(self.left_elbow, self.right_knee),
            distance(self.right_elbow, self.left_knee),
        )
    }

    fn markers(&self) -> [Point; 4] {
        [
            self.left_elbow,
            self.right_elbow,
            self.left_knee,
            self.right_knee,
        ]
    }
}

/// Shared enter/exit handling once the variant has evaluated its conditions
fn advance(
    kind: ExerciseKind,
    pose: &CrunchPose,
    previous: DetectorState,
    entered: bool,
    released: bool,
) -> Step {
    let overlay = Overlay::empty().markers(pose.markers());

    if !pose.standing {
        let state = previous.with_phase(Phase::Resting);
        return Step {
            state,
            overlay: overlay.status(NOT_STANDING).count(state.counter.total()),
        };
    }

    let mut state = previous;
    if !previous.primary.is_active() && entered {
        state = state.with_phase(Phase::Active);
        debug!(exercise = %kind, "Crunch down");
    } else if previous.primary.is_active() && released {
        state = state.with_phase(Phase::Resting).count();
        debug!(exercise = %kind, count = state.counter.total(), "Crunch released");
    }

    Step {
        state,
        overlay: overlay.count(state.counter.total()),
    }
}

/// Both elbows toward their own knees
#[derive(Debug, Clone, Copy)]
pub struct CrossStandingCrunchDetector {
    /// Elbow to same-side knee distance that counts as crunched
    pub crunch_px: f64,
    /// Extra distance both sides need to release
    pub margin_px: f64,
}

impl Default for CrossStandingCrunchDetector {
    fn default() -> Self {
        Self {
            crunch_px: cross_crunch::CRUNCH_PX,
            margin_px: cross_crunch::MARGIN_PX,
        }
    }
}

impl Detector for CrossStandingCrunchDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::CrossStandingCrunch
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some(pose) = CrunchPose::from_keypoints(keypoints) else {
            return Step::unchanged(previous);
        };
        let (left, right) = pose.same_side();
        let release = self.crunch_px + self.margin_px;

        let step = advance(
            self.kind(),
            &pose,
            previous,
            left < self.crunch_px && right < self.crunch_px,
            left > release && right > release,
        );
        Step {
            overlay: step
                .overlay
                .measurement("left", left, None)
                .measurement("right", right, None),
            ..step
        }
    }
}

/// One elbow to its own knee while staying away from the other knee
#[derive(Debug, Clone, Copy)]
pub struct SideStandingCrunchDetector {
    /// Same-side distance that counts as crunched, and the minimum cross-side distance
    pub crunch_px: f64,
    /// Extra same-side distance both sides need to release
    pub margin_px: f64,
}

impl Default for SideStandingCrunchDetector {
    fn default() -> Self {
        Self {
            crunch_px: side_crunch::CRUNCH_PX,
            margin_px: side_crunch::MARGIN_PX,
        }
    }
}

impl Detector for SideStandingCrunchDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::SideStandingCrunch
    }

    fn step(&self, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        let Some(pose) = CrunchPose::from_keypoints(keypoints) else {
            return Step::unchanged(previous);
        };
        let (left, right) = pose.same_side();
        let (left_cross, right_cross) = pose.cross_side();
        let release = self.crunch_px + self.margin_px;

        let entered = (left < self.crunch_px && left_cross > self.crunch_px)
            || (right < self.crunch_px && right_cross > self.crunch_px);

        let step = advance(
            self.kind(),
            &pose,
            previous,
            entered,
            left > release && right > release,
        );
        Step {
            overlay: step
                .overlay
                .measurement("left", left, None)
                .measurement("right", right, None),
            ..step
        }
    }
}
