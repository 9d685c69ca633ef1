//! The pure-angle pose model and its forward-kinematic evaluation.
//!
//! A [`Pose`] stores one root position plus local joint angles; every
//! joint position is derived, never stored. World angles accumulate
//! down the chain: a segment's direction is its rest direction plus the
//! sum of the local angles of its ancestors. Arm chains inherit the
//! full torso rotation; leg chains hang from the hips and inherit none
//! of it.

use serde::{Deserialize, Serialize};

use crate::appearance::Appearance;
use crate::geom::{
    polar_offset, up_to_right, wrap_degrees, Point, BASE_CANVAS_HEIGHT, BASE_CANVAS_WIDTH,
    DOWN_DEGREES, UP_DEGREES,
};
use crate::skeleton::{Joint, SegmentLengths};

/// Scale below this is clamped; a zero scale would collapse the figure
/// and make canvas mapping non-invertible.
pub const MIN_SCALE: f64 = 0.05;

fn canonical_center() -> Point {
    Point::new(BASE_CANVAS_WIDTH / 2.0, BASE_CANVAS_HEIGHT / 2.0)
}

fn default_scale() -> f64 {
    1.0
}

fn default_multiplier() -> f64 {
    1.0
}

fn default_elbow() -> f64 {
    45.0
}

fn default_hand() -> f64 {
    -45.0
}

// ============================================================================
// Pose
// ============================================================================

/// One complete figure configuration.
///
/// Angle fields are local degrees; mutation paths wrap them into
/// `(-180, 180]` before they are stored ([`Pose::normalize`] re-imposes
/// the invariant on data decoded from disk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Root of the figure in base-canvas coordinates.
    #[serde(default = "canonical_center")]
    pub waist: Point,

    /// Lean of the lower torso, applied to everything above the waist.
    #[serde(default)]
    pub waist_torso_angle: f64,
    /// Bend of the upper torso relative to the lower torso.
    #[serde(default)]
    pub mid_torso_angle: f64,
    /// Facing of the head, measured from straight up, layered on top of
    /// the torso rotation.
    #[serde(default)]
    pub head_angle: f64,

    #[serde(default)]
    pub left_shoulder_angle: f64,
    #[serde(default)]
    pub right_shoulder_angle: f64,
    #[serde(default = "default_elbow")]
    pub left_elbow_angle: f64,
    #[serde(default = "default_elbow")]
    pub right_elbow_angle: f64,
    #[serde(default = "default_hand")]
    pub left_hand_angle: f64,
    #[serde(default = "default_hand")]
    pub right_hand_angle: f64,

    #[serde(default)]
    pub left_knee_angle: f64,
    #[serde(default)]
    pub right_knee_angle: f64,
    #[serde(default)]
    pub left_foot_angle: f64,
    #[serde(default)]
    pub right_foot_angle: f64,

    /// Uniform render scale, clamped to [`MIN_SCALE`].
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Head size relative to the skeleton's head radius.
    #[serde(default = "default_multiplier")]
    pub head_radius_multiplier: f64,

    #[serde(default)]
    pub appearance: Appearance,
}

impl Default for Pose {
    /// The standing rest pose: limbs hanging, elbows and hands slightly
    /// bent, rooted at the canvas center.
    fn default() -> Self {
        Self {
            waist: canonical_center(),
            waist_torso_angle: 0.0,
            mid_torso_angle: 0.0,
            head_angle: 0.0,
            left_shoulder_angle: 0.0,
            right_shoulder_angle: 0.0,
            left_elbow_angle: default_elbow(),
            right_elbow_angle: default_elbow(),
            left_hand_angle: default_hand(),
            right_hand_angle: default_hand(),
            left_knee_angle: 0.0,
            right_knee_angle: 0.0,
            left_foot_angle: 0.0,
            right_foot_angle: 0.0,
            scale: 1.0,
            head_radius_multiplier: 1.0,
            appearance: Appearance::default(),
        }
    }
}

impl Pose {
    /// Combined rotation of the upper torso, inherited by head and arms.
    pub fn torso_rotation(&self) -> f64 {
        wrap_degrees(self.waist_torso_angle + self.mid_torso_angle)
    }

    /// Wraps every angle into `(-180, 180]` and clamps the scale.
    /// Decoded data passes through here before entering a store.
    pub fn normalize(&mut self) {
        for angle in [
            &mut self.waist_torso_angle,
            &mut self.mid_torso_angle,
            &mut self.head_angle,
            &mut self.left_shoulder_angle,
            &mut self.right_shoulder_angle,
            &mut self.left_elbow_angle,
            &mut self.right_elbow_angle,
            &mut self.left_hand_angle,
            &mut self.right_hand_angle,
            &mut self.left_knee_angle,
            &mut self.right_knee_angle,
            &mut self.left_foot_angle,
            &mut self.right_foot_angle,
        ] {
            *angle = wrap_degrees(*angle);
        }
        if !(self.scale >= MIN_SCALE) {
            self.scale = if self.scale.is_finite() { MIN_SCALE } else { 1.0 };
        }
    }

    /// Evaluates every joint position from the root and the local
    /// angles. Pure: same pose and lengths, same layout.
    pub fn evaluate(&self, lengths: &SegmentLengths) -> PoseLayout {
        let waist = self.waist;
        let lower_torso = UP_DEGREES + self.waist_torso_angle;
        let torso_rotation = self.waist_torso_angle + self.mid_torso_angle;
        let upper_torso = UP_DEGREES + torso_rotation;

        let mid_torso = polar_offset(waist, lower_torso, lengths.torso / 2.0);
        let neck = polar_offset(mid_torso, upper_torso, lengths.torso / 2.0);

        // Head facing is measured from up and rides on the torso.
        let head = polar_offset(
            neck,
            up_to_right(self.head_angle + torso_rotation),
            lengths.neck,
        );

        let arm_rest = DOWN_DEGREES + torso_rotation;
        let left_upper = arm_rest + self.left_shoulder_angle;
        let left_fore = left_upper + self.left_elbow_angle;
        let left_hand_dir = left_fore + self.left_hand_angle;
        let left_elbow = polar_offset(neck, left_upper, lengths.upper_arm);
        let left_wrist = polar_offset(left_elbow, left_fore, lengths.forearm);
        let left_hand = polar_offset(left_wrist, left_hand_dir, lengths.hand);

        let right_upper = arm_rest + self.right_shoulder_angle;
        let right_fore = right_upper + self.right_elbow_angle;
        let right_hand_dir = right_fore + self.right_hand_angle;
        let right_elbow = polar_offset(neck, right_upper, lengths.upper_arm);
        let right_wrist = polar_offset(right_elbow, right_fore, lengths.forearm);
        let right_hand = polar_offset(right_wrist, right_hand_dir, lengths.hand);

        // Legs hang from the hips in the unrotated frame.
        let left_hip = waist.offset(-lengths.hip_offset(), 0.0);
        let right_hip = waist.offset(lengths.hip_offset(), 0.0);
        let left_knee = polar_offset(
            left_hip,
            DOWN_DEGREES + self.left_knee_angle,
            lengths.upper_leg,
        );
        let left_foot = polar_offset(
            left_knee,
            DOWN_DEGREES + self.left_knee_angle + self.left_foot_angle,
            lengths.lower_leg,
        );
        let right_knee = polar_offset(
            right_hip,
            DOWN_DEGREES + self.right_knee_angle,
            lengths.upper_leg,
        );
        let right_foot = polar_offset(
            right_knee,
            DOWN_DEGREES + self.right_knee_angle + self.right_foot_angle,
            lengths.lower_leg,
        );

        PoseLayout {
            waist,
            mid_torso,
            neck,
            head,
            left_shoulder: neck,
            right_shoulder: neck,
            left_elbow,
            right_elbow,
            left_wrist,
            right_wrist,
            left_hand,
            right_hand,
            left_hip,
            right_hip,
            left_knee,
            right_knee,
            left_foot,
            right_foot,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Evaluated world positions for every joint, in base-canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseLayout {
    pub waist: Point,
    pub mid_torso: Point,
    pub neck: Point,
    pub head: Point,
    pub left_shoulder: Point,
    pub right_shoulder: Point,
    pub left_elbow: Point,
    pub right_elbow: Point,
    pub left_wrist: Point,
    pub right_wrist: Point,
    pub left_hand: Point,
    pub right_hand: Point,
    pub left_hip: Point,
    pub right_hip: Point,
    pub left_knee: Point,
    pub right_knee: Point,
    pub left_foot: Point,
    pub right_foot: Point,
}

impl PoseLayout {
    pub fn get(&self, joint: Joint) -> Point {
        match joint {
            Joint::Waist => self.waist,
            Joint::MidTorso => self.mid_torso,
            Joint::Neck => self.neck,
            Joint::Head => self.head,
            Joint::LeftShoulder => self.left_shoulder,
            Joint::RightShoulder => self.right_shoulder,
            Joint::LeftElbow => self.left_elbow,
            Joint::RightElbow => self.right_elbow,
            Joint::LeftWrist => self.left_wrist,
            Joint::RightWrist => self.right_wrist,
            Joint::LeftHand => self.left_hand,
            Joint::RightHand => self.right_hand,
            Joint::LeftHip => self.left_hip,
            Joint::RightHip => self.right_hip,
            Joint::LeftKnee => self.left_knee,
            Joint::RightKnee => self.right_knee,
            Joint::LeftFoot => self.left_foot,
            Joint::RightFoot => self.right_foot,
        }
    }

    /// Joint positions paired with their joints, root first.
    pub fn positions(&self) -> impl Iterator<Item = (Joint, Point)> + '_ {
        Joint::ALL.into_iter().map(move |joint| (joint, self.get(joint)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn rest_pose_stacks_the_torso_upward() {
        let mut pose = Pose::default();
        pose.left_elbow_angle = 0.0;
        pose.right_elbow_angle = 0.0;
        pose.left_hand_angle = 0.0;
        pose.right_hand_angle = 0.0;
        let lengths = SegmentLengths::default();
        let layout = pose.evaluate(&lengths);

        close(layout.mid_torso, Point::new(200.0, 200.0));
        close(layout.neck, Point::new(200.0, 175.0));
        close(layout.head, Point::new(200.0, 160.0));
        // Straightened limbs hang vertically.
        close(layout.left_hand, Point::new(200.0, 175.0 + 25.0 + 26.0 + 8.0));
        close(layout.left_knee, Point::new(192.5, 225.0 + 34.0));
        close(layout.left_foot, Point::new(192.5, 225.0 + 64.0));
        close(layout.right_hip, Point::new(207.5, 225.0));
    }

    #[test]
    fn evaluation_is_pure() {
        let pose = Pose {
            waist_torso_angle: 17.0,
            mid_torso_angle: -9.0,
            left_shoulder_angle: 33.0,
            left_knee_angle: -20.0,
            ..Pose::default()
        };
        let lengths = SegmentLengths::default();
        let a = pose.evaluate(&lengths);
        let b = pose.evaluate(&lengths);
        assert_eq!(a, b);
    }

    #[test]
    fn torso_lean_moves_arms_but_not_legs() {
        let lengths = SegmentLengths::default();
        let straight = Pose::default();
        let leaning = Pose {
            waist_torso_angle: 40.0,
            ..Pose::default()
        };

        let a = straight.evaluate(&lengths);
        let b = leaning.evaluate(&lengths);

        assert_ne!(a.neck, b.neck);
        assert_ne!(a.left_elbow, b.left_elbow);
        close(a.left_knee, b.left_knee);
        close(a.right_foot, b.right_foot);
    }

    #[test]
    fn segment_lengths_are_preserved_under_rotation() {
        let pose = Pose {
            waist_torso_angle: 25.0,
            mid_torso_angle: -40.0,
            left_shoulder_angle: 80.0,
            left_elbow_angle: -60.0,
            left_knee_angle: 55.0,
            left_foot_angle: 30.0,
            ..Pose::default()
        };
        let lengths = SegmentLengths::default();
        let layout = pose.evaluate(&lengths);

        let check = |a: Point, b: Point, len: f64| {
            assert!((a.distance_to(b) - len).abs() < 1e-9);
        };
        check(layout.waist, layout.mid_torso, lengths.torso / 2.0);
        check(layout.mid_torso, layout.neck, lengths.torso / 2.0);
        check(layout.neck, layout.head, lengths.neck);
        check(layout.neck, layout.left_elbow, lengths.upper_arm);
        check(layout.left_elbow, layout.left_wrist, lengths.forearm);
        check(layout.left_wrist, layout.left_hand, lengths.hand);
        check(layout.left_hip, layout.left_knee, lengths.upper_leg);
        check(layout.left_knee, layout.left_foot, lengths.lower_leg);
    }

    #[test]
    fn head_angle_is_measured_from_up() {
        let pose = Pose {
            head_angle: 90.0,
            ..Pose::default()
        };
        let lengths = SegmentLengths::default();
        let layout = pose.evaluate(&lengths);
        // Facing 90 degrees (to the right), the head sits beside the neck.
        close(layout.head, layout.neck.offset(lengths.neck, 0.0));
    }

    #[test]
    fn normalize_wraps_angles_and_clamps_scale() {
        let mut pose = Pose {
            waist_torso_angle: 540.0,
            left_knee_angle: -190.0,
            scale: 0.0,
            ..Pose::default()
        };
        pose.normalize();
        assert_eq!(pose.waist_torso_angle, 180.0);
        assert_eq!(pose.left_knee_angle, 170.0);
        assert_eq!(pose.scale, MIN_SCALE);
    }

    #[test]
    fn empty_json_decodes_to_the_standing_pose() {
        let decoded: Pose = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, Pose::default());
    }

    #[test]
    fn serde_round_trip_preserves_the_pose() {
        let pose = Pose {
            waist: Point::new(140.0, 260.0),
            waist_torso_angle: -33.5,
            head_angle: 12.0,
            right_knee_angle: 170.0,
            scale: 0.75,
            ..Pose::default()
        };
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
