// ABOUTME: Integration tests for the session engine driven by a deterministic clock
// ABOUTME: Covers schedule dispatch, counter persistence, rescheduling, and pass-through frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use repcount_server::detection::test_utils::{
    squat_frame, standing_pose, with_elbows_raised, with_knee_angle, with_wrists_overhead,
};
use repcount_server::detection::Side;
use repcount_server::engine::{Engine, EngineHandle, SegmentState};
use repcount_server::errors::ScheduleError;
use repcount_server::models::{CounterValue, ExerciseKind, Joint, KeypointMap, Point};
use repcount_server::schedule::{Schedule, ScheduleEntry, ScheduleView};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    t0() + Duration::seconds(secs)
}

fn engine_with(workout: &[(&str, u64)]) -> Engine {
    let entries = workout
        .iter()
        .map(|&(name, secs)| ScheduleEntry::new(name, secs))
        .collect();
    Engine::new(Schedule::new(entries, t0()))
}

fn feed_squats(engine: &mut Engine, angles: &[f64], secs: i64) {
    for &angle in angles {
        engine.process_frame_at(&squat_frame(angle), at(secs));
    }
}

#[test]
fn test_squats_then_jumping_jacks_scenario() {
    let mut engine = engine_with(&[("squats", 10), ("jumping_jacks", 10)]);

    let active = engine.active_at(at(5));
    assert_eq!(active.name(), Some("squats"));
    assert_eq!(active.remaining_secs(), 5);

    feed_squats(&mut engine, &[150.0, 90.0, 95.0, 170.0], 5);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));

    let status = engine.process_frame_at(&standing_pose(), at(11));
    assert_eq!(status.active_exercise, "jumping_jacks");
    assert_eq!(status.remaining_seconds, 9);
    assert_eq!(status.all_counters.total(ExerciseKind::Squats), 1);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

#[test]
fn test_oscillation_inside_band_counts_once_at_most() {
    let mut engine = engine_with(&[("squats", 60)]);
    feed_squats(&mut engine, &[150.0, 95.0, 105.0, 95.0, 105.0, 95.0], 1);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(0));

    feed_squats(&mut engine, &[170.0], 2);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

#[test]
fn test_frame_status_reports_active_counter() {
    let mut engine = engine_with(&[("squats", 10)]);
    feed_squats(&mut engine, &[90.0], 1);
    let status = engine.process_frame_at(&squat_frame(170.0), at(2));

    assert_eq!(status.state, SegmentState::Active);
    assert_eq!(status.active_exercise, "squats");
    assert_eq!(status.counter, 1);
    assert_eq!(status.remaining_seconds, 8);
    assert_eq!(status.all_counters.len(), ExerciseKind::COUNT);
}

#[test]
fn test_alias_dispatches_to_canonical_detector() {
    let mut engine = engine_with(&[("  Arms_Raise ", 30)]);
    engine.process_frame_at(&standing_pose(), at(1));
    let status = engine.process_frame_at(&with_elbows_raised(standing_pose()), at(2));

    assert_eq!(status.active_exercise, "  Arms_Raise ");
    assert_eq!(status.counter, 1);
    assert_eq!(engine.counter(ExerciseKind::ArmRaise), CounterValue::Scalar(1));
}

#[test]
fn test_reschedule_restarts_clock_but_keeps_counters() {
    let mut engine = engine_with(&[("squats", 10), ("jumping_jacks", 10)]);
    feed_squats(&mut engine, &[150.0, 90.0, 95.0, 170.0], 5);

    engine
        .reschedule_at(vec![20], vec!["lunges".to_owned()], at(7))
        .unwrap();

    let active = engine.active_at(at(7));
    assert_eq!(active.name(), Some("lunges"));
    assert_eq!(active.remaining_secs(), 20);
    assert_eq!(engine.schedule().started_at(), at(7));
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

#[test]
fn test_mismatched_reschedule_changes_nothing() {
    let mut engine = engine_with(&[("squats", 10)]);
    feed_squats(&mut engine, &[90.0, 170.0], 1);
    let before = engine.schedule().clone();

    let result = engine.reschedule_at(
        vec![10, 20, 30],
        vec!["squats".to_owned(), "lunges".to_owned()],
        at(3),
    );

    assert_eq!(
        result,
        Err(ScheduleError::LengthMismatch {
            exercises: 2,
            durations: 3,
        })
    );
    assert_eq!(engine.schedule(), &before);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

#[test]
fn test_finished_workout_passes_frames_through() {
    let mut engine = engine_with(&[("squats", 10), ("unknown_move", 5)]);
    feed_squats(&mut engine, &[90.0], 1);

    let status = engine.process_frame_at(&squat_frame(170.0), at(15));
    assert_eq!(status.state, SegmentState::Finished);
    assert_eq!(status.active_exercise, "None");
    assert_eq!(status.counter, 0);
    assert_eq!(status.remaining_seconds, 0);
    assert!(status.overlay.is_empty());
    // The squat stayed down: no detector ran on the finished frame
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(0));

    assert!(engine.active_at(at(3600)).is_finished());
}

#[test]
fn test_unknown_exercise_mutates_no_state() {
    let mut engine = engine_with(&[("burpees", 30)]);
    let before = engine.counters();

    for angle in [150.0, 90.0, 170.0] {
        let status = engine.process_frame_at(&squat_frame(angle), at(4));
        assert_eq!(status.state, SegmentState::Unknown);
        assert_eq!(status.active_exercise, "burpees");
        assert_eq!(status.counter, 0);
        assert_eq!(status.remaining_seconds, 26);
        assert!(status.overlay.has_status("Unknown Exercise"));
    }

    assert_eq!(engine.counters(), before);
}

#[test]
fn test_missing_landmarks_leave_state_unchanged() {
    let mut engine = engine_with(&[("squats", 30)]);
    feed_squats(&mut engine, &[90.0], 1);

    let status = engine.process_frame_at(&KeypointMap::new(), at(2));
    assert_eq!(status.state, SegmentState::Active);
    assert!(status.overlay.is_empty());

    feed_squats(&mut engine, &[170.0], 3);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

#[test]
fn test_switching_away_and_back_preserves_counts() {
    let mut engine = engine_with(&[("squats", 10), ("arm_stretches", 10), ("squats", 10)]);
    feed_squats(&mut engine, &[90.0, 170.0], 2);

    engine.process_frame_at(&with_wrists_overhead(standing_pose()), at(12));
    engine.process_frame_at(&standing_pose(), at(13));
    assert_eq!(
        engine.counter(ExerciseKind::ArmStretches),
        CounterValue::Scalar(1)
    );

    feed_squats(&mut engine, &[90.0, 170.0], 22);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(2));
}

#[test]
fn test_lunges_report_sum_of_sides() {
    let mut engine = engine_with(&[("lunges", 60)]);
    let lunge = |left: f64, right: f64| {
        with_knee_angle(
            with_knee_angle(standing_pose(), Side::Left, left),
            Side::Right,
            right,
        )
    };

    engine.process_frame_at(&lunge(90.0, 170.0), at(1));
    engine.process_frame_at(&lunge(170.0, 170.0), at(2));
    engine.process_frame_at(&lunge(170.0, 90.0), at(3));
    let status = engine.process_frame_at(&lunge(170.0, 170.0), at(4));

    assert_eq!(status.counter, 2);
    assert_eq!(
        engine.counter(ExerciseKind::Lunges),
        CounterValue::Sided { left: 1, right: 1 }
    );
}

#[test]
fn test_reset_zeroes_every_counter() {
    let mut engine = engine_with(&[("squats", 10), ("lunges", 10)]);
    feed_squats(&mut engine, &[90.0, 170.0], 1);
    let down = standing_pose().with(Joint::RightHip, Point::new(750.0, 550.0));
    engine.process_frame_at(&down, at(11));
    engine.process_frame_at(&standing_pose(), at(12));
    assert_eq!(
        engine.counter(ExerciseKind::Lunges),
        CounterValue::Sided { left: 0, right: 1 }
    );

    engine.reset_counters();
    let counters = engine.counters();
    assert!(counters.all_zero());
    assert_eq!(
        counters.get(ExerciseKind::Lunges),
        Some(CounterValue::Sided { left: 0, right: 0 })
    );
}

#[test]
fn test_reset_keeps_rep_in_progress() {
    let mut engine = engine_with(&[("squats", 30)]);
    feed_squats(&mut engine, &[90.0], 1);
    engine.reset_counters();
    feed_squats(&mut engine, &[170.0], 2);
    assert_eq!(engine.counter(ExerciseKind::Squats), CounterValue::Scalar(1));
}

fn timeline(view: &ScheduleView) -> (Vec<u64>, Vec<String>) {
    (view.time_intervals.clone(), view.exercises.clone())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_never_observe_partial_updates() {
    let long = (
        vec![10, 20, 30],
        vec!["squats".to_owned(), "lunges".to_owned(), "arm_stretches".to_owned()],
    );
    let short = (vec![5], vec!["jumping_jacks".to_owned()]);

    let entries = long
        .1
        .iter()
        .zip(&long.0)
        .map(|(name, &secs)| ScheduleEntry::new(name.as_str(), secs))
        .collect();
    let handle = EngineHandle::new(Engine::new(Schedule::new(entries, Utc::now())));
    let installed = Arc::new([long, short]);

    let mut tasks = Vec::new();
    for worker in 0..8_usize {
        let handle = handle.clone();
        let installed = Arc::clone(&installed);
        tasks.push(tokio::spawn(async move {
            for round in 0..50_usize {
                match (worker + round) % 4 {
                    0 => {
                        let angle = if round % 2 == 0 { 90.0 } else { 170.0 };
                        let status = handle.process_frame(&squat_frame(angle)).await;
                        assert_eq!(status.all_counters.len(), ExerciseKind::COUNT);
                    }
                    1 => {
                        let (intervals, exercises) = installed[round % 2].clone();
                        let view = handle.reschedule(intervals, exercises).await.unwrap();
                        assert_eq!(timeline(&view), installed[round % 2]);
                    }
                    2 => {
                        let snapshot = handle.reset_counters().await;
                        assert!(snapshot.all_zero(), "reset observed half-applied");
                    }
                    _ => {
                        let view = handle.schedule_view().await;
                        assert_eq!(view.time_intervals.len(), view.exercises.len());
                        assert!(installed.contains(&timeline(&view)));
                    }
                }
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    let view = handle.schedule_view().await;
    assert!(installed.contains(&timeline(&view)));
}
