// ABOUTME: Per-frame keypoint map consumed by the repetition detectors
// ABOUTME: Fixed-size joint table with JSON form and conversion from normalized landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::joint::{Joint, Point};
use crate::constants::frame::{CANONICAL_HEIGHT, CANONICAL_WIDTH};
use crate::errors::FrameError;

/// Pixel dimensions of the frame keypoints are scaled into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: CANONICAL_WIDTH,
            height: CANONICAL_HEIGHT,
        }
    }
}

/// One landmark as emitted by the pose model, in normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    /// Horizontal position, 0..1 of the frame width
    pub x: f32,
    /// Vertical position, 0..1 of the frame height
    pub y: f32,
    /// Model confidence that the landmark is visible
    #[serde(default = "full_visibility")]
    pub visibility: f32,
}

const fn full_visibility() -> f32 {
    1.0
}

/// Joint positions for a single frame
///
/// A joint that is absent means the pose model had insufficient confidence
/// for it. Detectors never substitute a default position for a missing joint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Joint, Point>", into = "BTreeMap<Joint, Point>")]
pub struct KeypointMap {
    points: [Option<Point>; Joint::COUNT],
}

impl KeypointMap {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: [None; Joint::COUNT],
        }
    }

    /// Builder-style insert
    #[must_use]
    pub const fn with(mut self, joint: Joint, point: Point) -> Self {
        self.points[joint.index()] = Some(point);
        self
    }

    /// Set a joint position, returning the previous one
    pub fn insert(&mut self, joint: Joint, point: Point) -> Option<Point> {
        self.points[joint.index()].replace(point)
    }

    /// Remove a joint, returning its position
    pub fn remove(&mut self, joint: Joint) -> Option<Point> {
        self.points[joint.index()].take()
    }

    /// Position of a joint, if present
    #[must_use]
    pub const fn get(&self, joint: Joint) -> Option<Point> {
        self.points[joint.index()]
    }

    /// Whether the joint is present
    #[must_use]
    pub const fn contains(&self, joint: Joint) -> bool {
        self.points[joint.index()].is_some()
    }

    /// Positions of several joints at once, or `None` if any is missing
    #[must_use]
    pub fn require<const N: usize>(&self, joints: [Joint; N]) -> Option<[Point; N]> {
        let mut out = [Point::default(); N];
        for (slot, joint) in out.iter_mut().zip(joints) {
            *slot = self.get(joint)?;
        }
        Some(out)
    }

    /// Number of joints present
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    /// Whether no joint is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }

    /// Present joints and their positions
    pub fn iter(&self) -> impl Iterator<Item = (Joint, Point)> + '_ {
        Joint::ALL
            .iter()
            .filter_map(|&joint| self.get(joint).map(|point| (joint, point)))
    }

    /// Reject maps carrying NaN or infinite coordinates
    ///
    /// # Errors
    ///
    /// Returns `FrameError::NonFiniteCoordinate` naming the first bad joint
    pub fn validate(&self) -> Result<(), FrameError> {
        match self.iter().find(|(_, point)| !point.is_finite()) {
            Some((joint, _)) => Err(FrameError::NonFiniteCoordinate {
                joint: joint.name(),
            }),
            None => Ok(()),
        }
    }

    /// Scale pose-model landmarks into pixel positions
    ///
    /// `landmarks` is indexed by the pose model's landmark index. Joints whose
    /// landmark is missing from the slice, non-finite, or below
    /// `min_visibility` are left absent.
    #[must_use]
    pub fn from_landmarks(
        landmarks: &[NormalizedLandmark],
        frame: FrameSize,
        min_visibility: f32,
    ) -> Self {
        let width = f64::from(frame.width);
        let height = f64::from(frame.height);
        let mut map = Self::new();
        for joint in Joint::ALL {
            let Some(landmark) = landmarks.get(joint.landmark_index()) else {
                continue;
            };
            if landmark.visibility < min_visibility {
                continue;
            }
            let point = Point::new(f64::from(landmark.x) * width, f64::from(landmark.y) * height);
            if point.is_finite() {
                map.insert(joint, point);
            }
        }
        map
    }
}

impl From<BTreeMap<Joint, Point>> for KeypointMap {
    fn from(entries: BTreeMap<Joint, Point>) -> Self {
        let mut map = Self::new();
        for (joint, point) in entries {
            map.insert(joint, point);
        }
        map
    }
}

impl From<KeypointMap> for BTreeMap<Joint, Point> {
    fn from(map: KeypointMap) -> Self {
        map.iter().collect()
    }
}

impl FromIterator<(Joint, Point)> for KeypointMap {
    fn from_iter<I: IntoIterator<Item = (Joint, Point)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (joint, point) in iter {
            map.insert(joint, point);
        }
        map
    }
}
