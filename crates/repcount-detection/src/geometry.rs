// ABOUTME: Geometry primitives for joint angles, distances, and posture checks
// ABOUTME: All inputs are pixel points in the canonical frame with y growing downwards

use repcount_core::models::Point;

/// Angle at `vertex` formed by `a` and `c`, in degrees within `[0, 180]`
///
/// Degenerate inputs (a point coinciding with the vertex) yield a finite
/// angle rather than NaN.
#[must_use]
pub fn angle_deg(a: Point, vertex: Point, c: Point) -> f64 {
    let radians =
        (c.y - vertex.y).atan2(c.x - vertex.x) - (a.y - vertex.y).atan2(a.x - vertex.x);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Euclidean distance in pixels
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Whether the torso is upright: average shoulder height above average hip height
#[must_use]
pub fn is_standing(
    left_shoulder: Point,
    right_shoulder: Point,
    left_hip: Point,
    right_hip: Point,
) -> bool {
    left_shoulder.midpoint(right_shoulder).y < left_hip.midpoint(right_hip).y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_straight_line_is_180() {
        let angle = angle_deg(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 20.0),
        );
        assert_close(angle, 180.0);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_deg(
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
        );
        assert_close(angle, 90.0);
    }

    #[test]
    fn test_reflex_angle_folds_below_180() {
        // raw atan2 difference is -270 degrees here
        let angle = angle_deg(
            Point::new(-10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, -10.0),
        );
        assert_close(angle, 90.0);
    }

    #[test]
    fn test_degenerate_angle_is_finite() {
        let p = Point::new(5.0, 5.0);
        assert!(angle_deg(p, p, Point::new(6.0, 6.0)).is_finite());
    }

    #[test]
    fn test_distance() {
        assert_close(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_standing() {
        let shoulder = Point::new(0.0, 100.0);
        let hip = Point::new(0.0, 300.0);
        assert!(is_standing(shoulder, shoulder, hip, hip));
        assert!(!is_standing(hip, hip, shoulder, shoulder));
    }
}
