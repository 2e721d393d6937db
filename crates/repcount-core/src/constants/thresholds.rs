// ABOUTME: Enter/exit thresholds for each repetition detector
// ABOUTME: Pixel values refer to the 1280x720 canonical frame, angles are in degrees

/// Arm raise: elbow above shoulder on the right side
pub mod arm_raise {
    /// Elbow must sit this many pixels above the shoulder to enter
    pub const RAISE_MARGIN_PX: f64 = 40.0;
}

/// Squat: right hip-knee-ankle angle
pub mod squat {
    /// Knee angle below which the squat is considered down
    pub const DOWN_ANGLE_DEG: f64 = 100.0;
    /// Knee angle above which the squat is considered up
    pub const UP_ANGLE_DEG: f64 = 160.0;
}

/// Front toe touch: distance between averaged wrists and averaged ankles
pub mod toe_touch_front {
    /// Touch threshold in pixels
    pub const TOUCH_PX: f64 = 150.0;
    /// Release margin added to the touch threshold
    pub const MARGIN_PX: f64 = 30.0;
}

/// Lunge: knee angle per leg
pub mod lunge {
    /// Knee angle below which a leg is down
    pub const DOWN_ANGLE_DEG: f64 = 110.0;
    /// Knee angle above which a leg is back up
    pub const UP_ANGLE_DEG: f64 = 160.0;
}

/// Side toe touch: wrist to opposite ankle
pub mod toe_touch_sides {
    /// Touch threshold in pixels
    pub const TOUCH_PX: f64 = 100.0;
    /// Release margin added to the touch threshold
    pub const MARGIN_PX: f64 = 30.0;
}

/// Arm stretch: wrists above the nose, then below the shoulders
pub mod arm_stretch {
    /// Wrists must drop this far below the shoulder line to release
    pub const RELEASE_BELOW_SHOULDER_PX: f64 = 20.0;
}

/// Cross standing crunch: elbow to same-side knee
pub mod cross_crunch {
    /// Crunch threshold in pixels
    pub const CRUNCH_PX: f64 = 350.0;
    /// Release margin added to the crunch threshold
    pub const MARGIN_PX: f64 = 20.0;
}

/// Side standing crunch: same-side close while cross-side far
pub mod side_crunch {
    /// Crunch threshold in pixels
    pub const CRUNCH_PX: f64 = 100.0;
    /// Release margin added to the crunch threshold
    pub const MARGIN_PX: f64 = 20.0;
}
