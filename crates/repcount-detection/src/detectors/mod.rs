// ABOUTME: The nine exercise detectors, one hysteresis machine per exercise kind
// ABOUTME: Thresholds default to the values in repcount_core::constants::thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Exercise detectors
//!
//! | Detector | Counts on |
//! |---|---|
//! | [`ArmRaiseDetector`] | enter (the raise itself) |
//! | every other detector | exit (return to rest) |
//!
//! Arm raises counting on enter is long-standing product behavior and is
//! kept as is.

mod arm_raise;
mod arm_stretches;
mod jumping_jacks;
mod lunges;
mod squats;
mod standing_crunch;
mod toe_touch_front;
mod toe_touch_sides;

pub use arm_raise::ArmRaiseDetector;
pub use arm_stretches::ArmStretchDetector;
pub use jumping_jacks::JumpingJackDetector;
pub use lunges::LungeDetector;
pub use squats::SquatDetector;
pub use standing_crunch::{CrossStandingCrunchDetector, SideStandingCrunchDetector};
pub use toe_touch_front::ToeTouchFrontDetector;
pub use toe_touch_sides::ToeTouchSidesDetector;
