// ABOUTME: Visualization hints emitted by detectors for an optional rendering layer
// ABOUTME: Hints never influence counting; headless callers can drop them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::models::Point;
use serde::Serialize;

/// One rendering directive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayHint {
    /// Highlight a position
    Marker {
        /// Where to draw
        at: Point,
    },
    /// Show a derived measurement, optionally anchored at a point
    Measurement {
        /// What was measured
        label: &'static str,
        /// Measured value (pixels or degrees)
        value: f64,
        /// Anchor point
        #[serde(skip_serializing_if = "Option::is_none")]
        at: Option<Point>,
    },
    /// Show a status banner
    Status {
        /// Banner text
        label: &'static str,
    },
    /// Show the running count
    Count {
        /// Current reported count
        value: u32,
    },
}

/// Hints produced by one detector step
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Overlay {
    hints: Vec<OverlayHint>,
}

impl Overlay {
    /// Overlay with no hints
    #[must_use]
    pub const fn empty() -> Self {
        Self { hints: Vec::new() }
    }

    /// Add a marker
    #[must_use]
    pub fn marker(mut self, at: Point) -> Self {
        self.hints.push(OverlayHint::Marker { at });
        self
    }

    /// Add markers for several points
    #[must_use]
    pub fn markers<I: IntoIterator<Item = Point>>(mut self, points: I) -> Self {
        self.hints
            .extend(points.into_iter().map(|at| OverlayHint::Marker { at }));
        self
    }

    /// Add a measurement
    #[must_use]
    pub fn measurement(mut self, label: &'static str, value: f64, at: Option<Point>) -> Self {
        self.hints
            .push(OverlayHint::Measurement { label, value, at });
        self
    }

    /// Add a status banner
    #[must_use]
    pub fn status(mut self, label: &'static str) -> Self {
        self.hints.push(OverlayHint::Status { label });
        self
    }

    /// Add the running count
    #[must_use]
    pub fn count(mut self, value: u32) -> Self {
        self.hints.push(OverlayHint::Count { value });
        self
    }

    /// Hints in emission order
    #[must_use]
    pub fn hints(&self) -> &[OverlayHint] {
        &self.hints
    }

    /// Whether no hint was emitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// Whether a status banner with this label was emitted
    #[must_use]
    pub fn has_status(&self, label: &str) -> bool {
        self.hints
            .iter()
            .any(|hint| matches!(hint, OverlayHint::Status { label: l } if *l == label))
    }
}
