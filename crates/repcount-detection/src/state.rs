// ABOUTME: Hysteresis phase flags and per-exercise detector state
// ABOUTME: Counters advance only through the helpers here, one increment per completed repetition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::models::{CounterValue, ExerciseKind};
use serde::{Deserialize, Serialize};

/// Hysteresis phase of one tracked side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the enter condition
    #[default]
    Resting,
    /// Enter condition met, waiting for the exit condition
    Active,
}

impl Phase {
    /// Whether the phase is `Active`
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Body side for detectors that track sides independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Left side of the body
    Left,
    /// Right side of the body
    Right,
}

/// Everything a detector remembers between frames
///
/// `primary` is the only phase most detectors use. Lunges track the left
/// leg in `primary` and the right leg in `secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorState {
    /// Phase of the main (or left) tracked side
    pub primary: Phase,
    /// Phase of the right side, for sided detectors
    pub secondary: Phase,
    /// Repetitions counted so far
    pub counter: CounterValue,
}

impl DetectorState {
    /// Resting state with a zero counter shaped for `kind`
    #[must_use]
    pub const fn initial(kind: ExerciseKind) -> Self {
        Self {
            primary: Phase::Resting,
            secondary: Phase::Resting,
            counter: CounterValue::zero_for(kind),
        }
    }

    /// Phase of one side
    #[must_use]
    pub const fn phase(&self, side: Side) -> Phase {
        match side {
            Side::Left => self.primary,
            Side::Right => self.secondary,
        }
    }

    /// Replace the primary phase
    #[must_use]
    pub const fn with_phase(mut self, phase: Phase) -> Self {
        self.primary = phase;
        self
    }

    /// Replace the phase of one side
    #[must_use]
    pub const fn with_side_phase(mut self, side: Side, phase: Phase) -> Self {
        match side {
            Side::Left => self.primary = phase,
            Side::Right => self.secondary = phase,
        }
        self
    }

    /// Count one repetition on a scalar counter
    ///
    /// Sided counters are advanced with [`Self::count_side`] instead;
    /// calling this on one is a detector bug and trips a debug assertion.
    #[must_use]
    pub const fn count(mut self) -> Self {
        debug_assert!(
            matches!(self.counter, CounterValue::Scalar(_)),
            "count called on a sided counter"
        );
        if let CounterValue::Scalar(count) = self.counter {
            self.counter = CounterValue::Scalar(count.saturating_add(1));
        }
        self
    }

    /// Count one repetition on one side of a sided counter
    ///
    /// Calling this on a scalar counter trips a debug assertion.
    #[must_use]
    pub const fn count_side(mut self, side: Side) -> Self {
        debug_assert!(
            matches!(self.counter, CounterValue::Sided { .. }),
            "count_side called on a scalar counter"
        );
        if let CounterValue::Sided { left, right } = self.counter {
            self.counter = match side {
                Side::Left => CounterValue::Sided {
                    left: left.saturating_add(1),
                    right,
                },
                Side::Right => CounterValue::Sided {
                    left,
                    right: right.saturating_add(1),
                },
            };
        }
        self
    }

    /// Same phases with every count set to zero
    #[must_use]
    pub const fn with_counter_reset(mut self) -> Self {
        self.counter = self.counter.zeroed();
        self
    }
}
