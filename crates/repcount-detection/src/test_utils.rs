// ABOUTME: Pose builders for detector tests, engine tests, and benchmarks
// ABOUTME: Produces canonical-frame keypoint maps with controllable joint angles and distances

use repcount_core::models::{Joint, KeypointMap, Point};

use crate::state::Side;

/// Length of the thigh used when placing the hip for a given knee angle
const THIGH_PX: f64 = 150.0;

/// Upright, arms-down pose with straight legs
///
/// Every detector sits on its resting side of the hysteresis band for this
/// pose, except the cross standing crunch whose 350px threshold covers
/// relaxed arms; use [`with_elbows_raised`] to release it.
#[must_use]
pub fn standing_pose() -> KeypointMap {
    KeypointMap::new()
        .with(Joint::Nose, Point::new(640.0, 100.0))
        .with(Joint::LeftShoulder, Point::new(700.0, 200.0))
        .with(Joint::RightShoulder, Point::new(580.0, 200.0))
        .with(Joint::LeftElbow, Point::new(720.0, 300.0))
        .with(Joint::RightElbow, Point::new(560.0, 300.0))
        .with(Joint::LeftWrist, Point::new(730.0, 400.0))
        .with(Joint::RightWrist, Point::new(550.0, 400.0))
        .with(Joint::LeftHip, Point::new(680.0, 400.0))
        .with(Joint::RightHip, Point::new(600.0, 400.0))
        .with(Joint::LeftKnee, Point::new(680.0, 550.0))
        .with(Joint::RightKnee, Point::new(600.0, 550.0))
        .with(Joint::LeftAnkle, Point::new(680.0, 700.0))
        .with(Joint::RightAnkle, Point::new(600.0, 700.0))
}

/// Torso inverted (shoulders below hips), as when lying or bent over
#[must_use]
pub fn inverted_pose() -> KeypointMap {
    standing_pose()
        .with(Joint::LeftShoulder, Point::new(700.0, 500.0))
        .with(Joint::RightShoulder, Point::new(580.0, 500.0))
        .with(Joint::LeftHip, Point::new(680.0, 300.0))
        .with(Joint::RightHip, Point::new(600.0, 300.0))
}

/// Move the hip of one leg so the hip-knee-ankle angle equals `angle_deg`
///
/// The shin stays vertical; `180` reproduces a straight leg.
#[must_use]
pub fn with_knee_angle(pose: KeypointMap, side: Side, angle_deg: f64) -> KeypointMap {
    let (hip, knee) = match side {
        Side::Left => (Joint::LeftHip, Joint::LeftKnee),
        Side::Right => (Joint::RightHip, Joint::RightKnee),
    };
    let Some(knee_at) = pose.get(knee) else {
        return pose;
    };
    let radians = angle_deg.to_radians();
    pose.with(
        hip,
        Point::new(
            knee_at.x + THIGH_PX * radians.sin(),
            knee_at.y + THIGH_PX * radians.cos(),
        ),
    )
}

/// Both elbows lifted far from the knees
#[must_use]
pub fn with_elbows_raised(pose: KeypointMap) -> KeypointMap {
    pose.with(Joint::LeftElbow, Point::new(720.0, 120.0))
        .with(Joint::RightElbow, Point::new(560.0, 120.0))
}

/// Standing pose with both wrists over the head
#[must_use]
pub fn with_wrists_overhead(pose: KeypointMap) -> KeypointMap {
    pose.with(Joint::LeftWrist, Point::new(730.0, 50.0))
        .with(Joint::RightWrist, Point::new(550.0, 50.0))
}

/// Squat frame: right knee at `angle_deg`
#[must_use]
pub fn squat_frame(angle_deg: f64) -> KeypointMap {
    with_knee_angle(standing_pose(), Side::Right, angle_deg)
}

/// Drop joints from a pose
#[must_use]
pub fn without(mut pose: KeypointMap, joints: &[Joint]) -> KeypointMap {
    for &joint in joints {
        pose.remove(joint);
    }
    pose
}
