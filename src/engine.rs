// ABOUTME: Session engine dispatching each frame to the detector of the active workout segment
// ABOUTME: EngineHandle serializes frames and administrative calls through one async mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! # Engine
//!
//! The [`Engine`] owns every piece of mutable session state: the workout
//! [`Schedule`], the [`CounterStore`] and the [`DetectorRegistry`]. Each
//! call to [`Engine::process_frame_at`] resolves the active segment, runs
//! exactly one detector step and persists the returned state.
//!
//! The engine itself is synchronous and has no interior locking.
//! [`EngineHandle`] is the shared form injected into request handlers;
//! every operation takes the same lock for one engine call, so a frame
//! never interleaves with a reschedule or a reset.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use repcount_core::constants::schedule::FINISHED_EXERCISE_NAME;
use repcount_core::errors::{FrameError, ScheduleError};
use repcount_core::models::{
    CounterSnapshot, CounterValue, ExerciseKind, FrameSize, KeypointMap, NormalizedLandmark,
};
use repcount_detection::{DetectorRegistry, Overlay};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::counters::CounterStore;
use crate::schedule::{ActiveSegment, Schedule, ScheduleView};

/// How the reported exercise was classified for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    /// A detector ran for this frame
    Active,
    /// The scheduled name matches no exercise; the frame passed through
    Unknown,
    /// The workout is over; the frame passed through
    Finished,
}

/// Aggregated result of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStatus {
    /// Scheduled exercise name, or `"None"` once finished
    pub active_exercise: String,
    /// Classification of the active segment
    pub state: SegmentState,
    /// Reported count of the active exercise (sum of both sides for lunges)
    pub counter: u32,
    /// Whole seconds left in the active segment
    pub remaining_seconds: u64,
    /// Every counter
    pub all_counters: CounterSnapshot,
    /// Rendering hints from the detector that ran, if any
    #[serde(skip_serializing_if = "Overlay::is_empty")]
    pub overlay: Overlay,
}

/// A submitted frame: either pixel keypoints or raw pose-model landmarks
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameInput {
    /// Joint positions in canonical-frame pixels
    #[serde(default)]
    pub keypoints: Option<KeypointMap>,
    /// Normalized landmarks indexed by pose-model landmark index
    #[serde(default)]
    pub landmarks: Option<Vec<NormalizedLandmark>>,
}

impl FrameInput {
    /// Resolve the submission to a keypoint map
    ///
    /// # Errors
    ///
    /// Returns `FrameError::Empty` or `FrameError::Ambiguous` unless exactly
    /// one representation is present, and `FrameError::NonFiniteCoordinate`
    /// for unusable pixel coordinates
    pub fn into_keypoints(
        self,
        frame: FrameSize,
        min_visibility: f32,
    ) -> Result<KeypointMap, FrameError> {
        match (self.keypoints, self.landmarks) {
            (Some(keypoints), None) => {
                keypoints.validate()?;
                Ok(keypoints)
            }
            (None, Some(landmarks)) => Ok(KeypointMap::from_landmarks(
                &landmarks,
                frame,
                min_visibility,
            )),
            (Some(_), Some(_)) => Err(FrameError::Ambiguous),
            (None, None) => Err(FrameError::Empty),
        }
    }
}

/// Session state and per-frame dispatch
#[derive(Debug)]
pub struct Engine {
    registry: DetectorRegistry,
    schedule: Schedule,
    counters: CounterStore,
    /// Segment index seen by the previous frame, for transition logging
    last_segment: Option<usize>,
}

impl Engine {
    /// Engine with the default detectors
    #[must_use]
    pub fn new(schedule: Schedule) -> Self {
        Self::with_registry(DetectorRegistry::default(), schedule)
    }

    /// Engine with a custom detector registry
    #[must_use]
    pub fn with_registry(registry: DetectorRegistry, schedule: Schedule) -> Self {
        Self {
            registry,
            schedule,
            counters: CounterStore::new(),
            last_segment: None,
        }
    }

    /// Run the active detector on one frame
    pub fn process_frame_at(&mut self, keypoints: &KeypointMap, now: DateTime<Utc>) -> FrameStatus {
        let active = self.schedule.active_at(now);
        let segment = match active {
            ActiveSegment::Exercise { index, .. } | ActiveSegment::Unknown { index, .. } => {
                Some(index)
            }
            ActiveSegment::Finished => None,
        };
        if segment != self.last_segment {
            self.last_segment = segment;
            match active.name() {
                Some(name) => info!(exercise = name, segment = ?segment, "Workout segment started"),
                None => info!("Workout finished"),
            }
        }

        match active {
            ActiveSegment::Exercise {
                name,
                kind,
                remaining_secs,
                ..
            } => {
                let step = self
                    .registry
                    .step(kind, keypoints, self.counters.state(kind));
                self.counters.set_state(kind, step.state);
                FrameStatus {
                    active_exercise: name.to_owned(),
                    state: SegmentState::Active,
                    counter: step.state.counter.total(),
                    remaining_seconds: remaining_secs,
                    all_counters: self.counters.snapshot(),
                    overlay: step.overlay,
                }
            }
            ActiveSegment::Unknown {
                name,
                remaining_secs,
                ..
            } => {
                debug!(exercise = name, "Unknown exercise, frame passed through");
                FrameStatus {
                    active_exercise: name.to_owned(),
                    state: SegmentState::Unknown,
                    counter: 0,
                    remaining_seconds: remaining_secs,
                    all_counters: self.counters.snapshot(),
                    overlay: Overlay::empty().status("Unknown Exercise"),
                }
            }
            ActiveSegment::Finished => FrameStatus {
                active_exercise: FINISHED_EXERCISE_NAME.to_owned(),
                state: SegmentState::Finished,
                counter: 0,
                remaining_seconds: 0,
                all_counters: self.counters.snapshot(),
                overlay: Overlay::empty(),
            },
        }
    }

    /// Install a new timeline starting at `now`
    ///
    /// Counters and detector phases are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::LengthMismatch` if the lists differ in
    /// length; the current schedule is kept in that case
    pub fn reschedule_at(
        &mut self,
        time_intervals: Vec<u64>,
        exercises: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<(), ScheduleError> {
        let schedule = Schedule::from_lists(time_intervals, exercises, now).inspect_err(|e| {
            warn!(error = %e, "Rejected schedule");
        })?;
        info!(
            segments = schedule.entries().len(),
            total_secs = schedule.total_secs(),
            "Schedule updated"
        );
        self.schedule = schedule;
        self.last_segment = None;
        Ok(())
    }

    /// Segment active at `now`
    #[must_use]
    pub fn active_at(&self, now: DateTime<Utc>) -> ActiveSegment<'_> {
        self.schedule.active_at(now)
    }

    /// Timeline plus the derived active exercise at `now`
    #[must_use]
    pub fn schedule_view_at(&self, now: DateTime<Utc>) -> ScheduleView {
        self.schedule.view_at(now)
    }

    /// Installed timeline
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Counter of one exercise
    #[must_use]
    pub const fn counter(&self, kind: ExerciseKind) -> CounterValue {
        self.counters.get(kind)
    }

    /// Every counter
    #[must_use]
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// Zero every counter
    pub fn reset_counters(&mut self) {
        self.counters.reset_all();
    }
}

/// Shared, serialized access to one [`Engine`]
#[derive(Debug, Clone)]
pub struct EngineHandle {
    inner: Arc<Mutex<Engine>>,
}

impl EngineHandle {
    /// Wrap an engine for sharing between handlers
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Process one frame against the wall clock
    pub async fn process_frame(&self, keypoints: &KeypointMap) -> FrameStatus {
        let mut engine = self.inner.lock().await;
        engine.process_frame_at(keypoints, Utc::now())
    }

    /// Install a new timeline starting now and return its view
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::LengthMismatch` if the lists differ in length
    pub async fn reschedule(
        &self,
        time_intervals: Vec<u64>,
        exercises: Vec<String>,
    ) -> Result<ScheduleView, ScheduleError> {
        let mut engine = self.inner.lock().await;
        let now = Utc::now();
        engine.reschedule_at(time_intervals, exercises, now)?;
        Ok(engine.schedule_view_at(now))
    }

    /// Current timeline view
    pub async fn schedule_view(&self) -> ScheduleView {
        self.inner.lock().await.schedule_view_at(Utc::now())
    }

    /// Every counter
    pub async fn counters(&self) -> CounterSnapshot {
        self.inner.lock().await.counters()
    }

    /// Zero every counter and return the resulting snapshot
    pub async fn reset_counters(&self) -> CounterSnapshot {
        let mut engine = self.inner.lock().await;
        engine.reset_counters();
        engine.counters()
    }
}
