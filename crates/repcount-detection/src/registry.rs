// ABOUTME: Registry mapping each exercise kind to exactly one detector
// ABOUTME: Indexed by ExerciseKind so dispatch is a constant-time array lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::fmt;

use repcount_core::models::{ExerciseKind, KeypointMap};

use crate::detector::{Detector, Step};
use crate::detectors::{
    ArmRaiseDetector, ArmStretchDetector, CrossStandingCrunchDetector, JumpingJackDetector,
    LungeDetector, SideStandingCrunchDetector, SquatDetector, ToeTouchFrontDetector,
    ToeTouchSidesDetector,
};
use crate::state::DetectorState;

/// One detector per [`ExerciseKind`]
pub struct DetectorRegistry {
    detectors: [Box<dyn Detector>; ExerciseKind::COUNT],
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        // Array order follows ExerciseKind::index()
        Self {
            detectors: [
                Box::new(ArmRaiseDetector::default()),
                Box::new(JumpingJackDetector),
                Box::new(SquatDetector::default()),
                Box::new(ToeTouchFrontDetector::default()),
                Box::new(LungeDetector::default()),
                Box::new(ToeTouchSidesDetector::default()),
                Box::new(ArmStretchDetector::default()),
                Box::new(CrossStandingCrunchDetector::default()),
                Box::new(SideStandingCrunchDetector::default()),
            ],
        }
    }
}

impl DetectorRegistry {
    /// Replace the detector registered for `detector.kind()`
    #[must_use]
    pub fn with_detector(mut self, detector: Box<dyn Detector>) -> Self {
        let index = detector.kind().index();
        self.detectors[index] = detector;
        self
    }

    /// Detector for a kind
    #[must_use]
    pub fn get(&self, kind: ExerciseKind) -> &dyn Detector {
        self.detectors[kind.index()].as_ref()
    }

    /// Step the detector for `kind`
    #[must_use]
    pub fn step(&self, kind: ExerciseKind, keypoints: &KeypointMap, previous: DetectorState) -> Step {
        self.get(kind).step(keypoints, previous)
    }
}

impl fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.detectors.iter().map(|detector| detector.kind()))
            .finish()
    }
}
