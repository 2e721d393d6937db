// ABOUTME: Per-exercise detector state and counters for one session
// ABOUTME: All nine kinds exist for the whole session so switching exercises preserves counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

use repcount_core::models::{CounterSnapshot, CounterValue, ExerciseKind};
use repcount_detection::DetectorState;
use tracing::info;

/// Detector state for every exercise kind
///
/// The store has its own lifecycle: installing a new schedule never touches
/// it, and [`CounterStore::reset_all`] never touches the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterStore {
    states: [DetectorState; ExerciseKind::COUNT],
}

impl Default for CounterStore {
    fn default() -> Self {
        Self {
            states: ExerciseKind::ALL.map(DetectorState::initial),
        }
    }
}

impl CounterStore {
    /// Fresh store with every counter at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of one detector
    #[must_use]
    pub const fn state(&self, kind: ExerciseKind) -> DetectorState {
        self.states[kind.index()]
    }

    /// Persist the state returned by a detector step
    pub fn set_state(&mut self, kind: ExerciseKind, state: DetectorState) {
        self.states[kind.index()] = state;
    }

    /// Counter of one exercise
    #[must_use]
    pub const fn get(&self, kind: ExerciseKind) -> CounterValue {
        self.states[kind.index()].counter
    }

    /// Every counter, keyed by canonical exercise
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        ExerciseKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .collect()
    }

    /// Zero every counter, both lunge sides included
    ///
    /// Phases are kept: a repetition already in progress still completes
    /// and counts once after the reset.
    pub fn reset_all(&mut self) {
        for state in &mut self.states {
            *state = state.with_counter_reset();
        }
        info!("All counters reset to zero");
    }
}
