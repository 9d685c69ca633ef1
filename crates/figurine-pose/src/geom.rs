//! Planar geometry primitives and degree-based angle arithmetic.
//!
//! Every angle in the crate is a value in degrees reduced to the
//! half-open interval `(-180, 180]`. The coordinate space is screen
//! space: `x` grows to the right, `y` grows downward, and `0` degrees
//! points to the right (the `atan2(dy, dx)` convention). Two named
//! constants anchor the figure's rest directions in that space.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Direction the torso extends from the waist when no rotation is applied.
pub const UP_DEGREES: f64 = -90.0;

/// Rest direction of limb segments: arms and legs hang straight down at
/// a local angle of zero.
pub const DOWN_DEGREES: f64 = 90.0;

/// Logical canvas the figure is authored against. Rendering surfaces of
/// other sizes map through [`to_canvas`] / [`from_canvas`].
pub const BASE_CANVAS_WIDTH: f64 = 400.0;
pub const BASE_CANVAS_HEIGHT: f64 = 450.0;

// ============================================================================
// Point
// ============================================================================

/// A position in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

// ============================================================================
// Angle arithmetic
// ============================================================================

/// Reduces an angle in degrees to `(-180, 180]`.
///
/// Idempotent: `wrap_degrees(wrap_degrees(a)) == wrap_degrees(a)` for any
/// finite input.
pub fn wrap_degrees(angle: f64) -> f64 {
    let mut wrapped = angle % 360.0;
    if wrapped <= -180.0 {
        wrapped += 360.0;
    } else if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    wrap_degrees(to - from)
}

/// Moves `last` toward `target` by the fraction `alpha` of the shortest
/// angular difference. An `alpha` of 1 snaps to the target; values below
/// 1 damp jittery input sources.
pub fn smooth_angle(last: f64, target: f64, alpha: f64) -> f64 {
    wrap_degrees(last + shortest_delta(last, target) * alpha)
}

/// Direction from `from` to `to` in degrees, or `None` when the points
/// coincide and no direction exists.
pub fn angle_between(from: Point, to: Point) -> Option<f64> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(dy.atan2(dx).to_degrees())
}

/// Point at `length` from `origin` along the direction `degrees`.
pub fn polar_offset(origin: Point, degrees: f64, length: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        origin.x + length * radians.cos(),
        origin.y + length * radians.sin(),
    )
}

/// Converts an angle measured from the rightward axis into one measured
/// from the upward axis (head facing uses the upward basis).
pub fn right_to_up(degrees: f64) -> f64 {
    wrap_degrees(degrees + 90.0)
}

/// Inverse of [`right_to_up`].
pub fn up_to_right(degrees: f64) -> f64 {
    wrap_degrees(degrees - 90.0)
}

// ============================================================================
// Canvas mapping
// ============================================================================

/// Maps a point from base-canvas coordinates onto a surface scaled by
/// `scale`, keeping the canvas center fixed.
pub fn to_canvas(point: Point, scale: f64) -> Point {
    let cx = BASE_CANVAS_WIDTH / 2.0;
    let cy = BASE_CANVAS_HEIGHT / 2.0;
    Point::new(cx + (point.x - cx) * scale, cy + (point.y - cy) * scale)
}

/// Inverse of [`to_canvas`]. `scale` must be non-zero; callers clamp
/// scale well above zero before it reaches here.
pub fn from_canvas(point: Point, scale: f64) -> Point {
    let cx = BASE_CANVAS_WIDTH / 2.0;
    let cy = BASE_CANVAS_HEIGHT / 2.0;
    Point::new(cx + (point.x - cx) / scale, cy + (point.y - cy) / scale)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_reduces_into_half_open_interval() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(540.0), 180.0);
        assert_eq!(wrap_degrees(-540.0), 180.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
    }

    #[test]
    fn wrap_is_idempotent() {
        for raw in [-720.0, -540.0, -361.0, -180.0, -0.5, 0.0, 90.0, 180.0, 359.0, 1234.5] {
            let once = wrap_degrees(raw);
            assert_eq!(wrap_degrees(once), once, "input {raw}");
        }
    }

    #[test]
    fn shortest_delta_crosses_the_seam() {
        assert_eq!(shortest_delta(170.0, -170.0), 20.0);
        assert_eq!(shortest_delta(-170.0, 170.0), -20.0);
        assert_eq!(shortest_delta(0.0, 90.0), 90.0);
    }

    #[test]
    fn smoothing_moves_a_fraction_of_the_gap() {
        let moved = smooth_angle(0.0, 90.0, 0.3);
        assert!((moved - 27.0).abs() < 1e-9);
    }

    #[test]
    fn smoothing_takes_the_short_way_around() {
        // From 170 toward -170 the short path is +20, not -340.
        let moved = smooth_angle(170.0, -170.0, 0.5);
        assert!((moved - 180.0).abs() < 1e-9);
    }

    #[test]
    fn angle_between_is_none_for_coincident_points() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(angle_between(p, p), None);
    }

    #[test]
    fn polar_offset_matches_atan2_convention() {
        let origin = Point::new(10.0, 10.0);
        let down = polar_offset(origin, DOWN_DEGREES, 5.0);
        assert!((down.x - 10.0).abs() < 1e-9);
        assert!((down.y - 15.0).abs() < 1e-9);

        let up = polar_offset(origin, UP_DEGREES, 5.0);
        assert!((up.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn up_basis_conversion_round_trips() {
        for a in [-170.0, -90.0, 0.0, 45.0, 180.0] {
            assert_eq!(up_to_right(right_to_up(a)), wrap_degrees(a));
        }
    }

    #[test]
    fn canvas_mapping_round_trips_about_the_center() {
        let p = Point::new(120.0, 300.0);
        let out = to_canvas(p, 0.5);
        let back = from_canvas(out, 0.5);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);

        let center = Point::new(BASE_CANVAS_WIDTH / 2.0, BASE_CANVAS_HEIGHT / 2.0);
        assert_eq!(to_canvas(center, 0.25), center);
    }
}
