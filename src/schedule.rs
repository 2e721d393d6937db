// ABOUTME: Workout timeline of (exercise, duration) segments with cumulative boundaries
// ABOUTME: Resolves the active segment and remaining time from wall-clock elapsed time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Workout schedule
//!
//! A schedule is an ordered list of segments plus the instant it was
//! installed. Segment `i` is active while the elapsed time is below the
//! cumulative boundary `B[i] = duration[0] + ... + duration[i]`; once the
//! elapsed time reaches the last boundary the workout is finished.

use chrono::{DateTime, Utc};
use repcount_core::constants::schedule::DEFAULT_WORKOUT;
use repcount_core::errors::ScheduleError;
use repcount_core::models::ExerciseKind;
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: u64 = 1_000;

/// One timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Exercise name as supplied by the caller (any alias, or an unknown name)
    pub exercise: String,
    /// Segment length in seconds
    pub duration_secs: u64,
}

impl ScheduleEntry {
    /// Create an entry
    #[must_use]
    pub fn new(exercise: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            exercise: exercise.into(),
            duration_secs,
        }
    }
}

/// Segment resolved for a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSegment<'a> {
    /// A segment whose name resolves to a known exercise
    Exercise {
        /// Name exactly as scheduled
        name: &'a str,
        /// Canonical kind the name resolves to
        kind: ExerciseKind,
        /// Position of the segment in the timeline
        index: usize,
        /// Time spent inside this segment
        elapsed_ms: u64,
        /// Whole seconds left in this segment, rounded down
        remaining_secs: u64,
    },
    /// A segment whose name matches no known exercise
    Unknown {
        /// Name exactly as scheduled
        name: &'a str,
        /// Position of the segment in the timeline
        index: usize,
        /// Time spent inside this segment
        elapsed_ms: u64,
        /// Whole seconds left in this segment, rounded down
        remaining_secs: u64,
    },
    /// Every segment has elapsed
    Finished,
}

impl ActiveSegment<'_> {
    /// Scheduled name, or `None` once finished
    #[must_use]
    pub const fn name(&self) -> Option<&str> {
        match self {
            Self::Exercise { name, .. } | Self::Unknown { name, .. } => Some(*name),
            Self::Finished => None,
        }
    }

    /// Whole seconds left in the active segment; zero once finished
    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        match self {
            Self::Exercise { remaining_secs, .. } | Self::Unknown { remaining_secs, .. } => {
                *remaining_secs
            }
            Self::Finished => 0,
        }
    }

    /// Whether the workout has finished
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Timeline snapshot returned to administrative callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    /// Segment durations in seconds
    pub time_intervals: Vec<u64>,
    /// Segment exercise names
    pub exercises: Vec<String>,
    /// Name of the active segment, `None` once finished
    pub current_exercise: Option<String>,
    /// Whole seconds left in the active segment
    pub time_remaining: u64,
    /// When the timeline was installed
    pub started_at: DateTime<Utc>,
}

/// Ordered workout timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
    /// Cumulative segment ends in milliseconds, non-decreasing
    boundaries_ms: Vec<u64>,
    started_at: DateTime<Utc>,
}

impl Schedule {
    /// Build a timeline starting at `started_at`
    #[must_use]
    pub fn new(entries: Vec<ScheduleEntry>, started_at: DateTime<Utc>) -> Self {
        let boundaries_ms = entries
            .iter()
            .scan(0_u64, |total, entry| {
                *total = total.saturating_add(entry.duration_secs.saturating_mul(MILLIS_PER_SECOND));
                Some(*total)
            })
            .collect();
        Self {
            entries,
            boundaries_ms,
            started_at,
        }
    }

    /// Build a timeline from parallel duration and name lists
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::LengthMismatch` if the lists differ in length
    pub fn from_lists(
        time_intervals: Vec<u64>,
        exercises: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, ScheduleError> {
        if time_intervals.len() != exercises.len() {
            return Err(ScheduleError::LengthMismatch {
                exercises: exercises.len(),
                durations: time_intervals.len(),
            });
        }
        let entries = exercises
            .into_iter()
            .zip(time_intervals)
            .map(|(exercise, duration_secs)| ScheduleEntry::new(exercise, duration_secs))
            .collect();
        Ok(Self::new(entries, started_at))
    }

    /// The built-in three-segment warm-up workout
    #[must_use]
    pub fn default_workout(started_at: DateTime<Utc>) -> Self {
        Self::new(
            DEFAULT_WORKOUT
                .iter()
                .map(|&(name, secs)| ScheduleEntry::new(name, secs))
                .collect(),
            started_at,
        )
    }

    /// Segments in order
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// When the timeline was installed
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Total length of the workout in seconds
    #[must_use]
    pub fn total_secs(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |total, entry| total.saturating_add(entry.duration_secs))
    }

    /// Milliseconds since the timeline was installed; zero if `now` is earlier
    #[must_use]
    pub fn elapsed_ms_at(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_milliseconds()).unwrap_or(0)
    }

    /// Segment active at `now`
    #[must_use]
    pub fn active_at(&self, now: DateTime<Utc>) -> ActiveSegment<'_> {
        let elapsed = self.elapsed_ms_at(now);
        let Some(index) = self.boundaries_ms.iter().position(|&end| elapsed < end) else {
            return ActiveSegment::Finished;
        };

        let end = self.boundaries_ms[index];
        let start = index
            .checked_sub(1)
            .map_or(0, |previous| self.boundaries_ms[previous]);
        let elapsed_ms = elapsed - start;
        let remaining_secs = (end - elapsed) / MILLIS_PER_SECOND;
        let name = self.entries[index].exercise.as_str();

        match ExerciseKind::resolve(name) {
            Some(kind) => ActiveSegment::Exercise {
                name,
                kind,
                index,
                elapsed_ms,
                remaining_secs,
            },
            None => ActiveSegment::Unknown {
                name,
                index,
                elapsed_ms,
                remaining_secs,
            },
        }
    }

    /// Timeline plus the derived active exercise at `now`
    #[must_use]
    pub fn view_at(&self, now: DateTime<Utc>) -> ScheduleView {
        let active = self.active_at(now);
        ScheduleView {
            time_intervals: self.entries.iter().map(|e| e.duration_secs).collect(),
            exercises: self.entries.iter().map(|e| e.exercise.clone()).collect(),
            current_exercise: active.name().map(str::to_owned),
            time_remaining: active.remaining_secs(),
            started_at: self.started_at,
        }
    }
}
