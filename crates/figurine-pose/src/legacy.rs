//! Import of the older point-based pose format.
//!
//! Early saves stored absolute joint positions instead of angles, one
//! flattened x/y pair per joint. Those files are still accepted: the
//! decode recovers local angles from the stored segment directions,
//! producing a [`Pose`] that re-derives equivalent positions through
//! forward kinematics. Conversion happens once at load; nothing in the
//! angle model ever writes this format back.

use serde::{Deserialize, Serialize};

use crate::geom::{angle_between, right_to_up, wrap_degrees, Point, DOWN_DEGREES, UP_DEGREES};
use crate::pose::Pose;

/// A pose in the point-based save format. Field names mirror the
/// original files exactly; unknown keys are rejected so a corrupted
/// file fails loud instead of half-loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PointPose {
    pub head_position_x: f64,
    pub head_position_y: f64,
    pub neck_position_x: f64,
    pub neck_position_y: f64,
    pub shoulder_left_x: f64,
    pub shoulder_left_y: f64,
    pub shoulder_right_x: f64,
    pub shoulder_right_y: f64,
    pub elbow_left_x: f64,
    pub elbow_left_y: f64,
    pub elbow_right_x: f64,
    pub elbow_right_y: f64,
    pub hand_left_x: f64,
    pub hand_left_y: f64,
    pub hand_right_x: f64,
    pub hand_right_y: f64,
    pub hip_left_x: f64,
    pub hip_left_y: f64,
    pub hip_right_x: f64,
    pub hip_right_y: f64,
    pub knee_left_x: f64,
    pub knee_left_y: f64,
    pub knee_right_x: f64,
    pub knee_right_y: f64,
    pub foot_left_x: f64,
    pub foot_left_y: f64,
    pub foot_right_x: f64,
    pub foot_right_y: f64,
    /// Draw-order hints from the old renderer. Preserved on decode but
    /// not part of the angle model.
    #[serde(default)]
    pub front_arm_is_left: bool,
    #[serde(default)]
    pub front_leg_is_left: bool,
}

impl PointPose {
    pub fn head(&self) -> Point {
        Point::new(self.head_position_x, self.head_position_y)
    }

    pub fn neck(&self) -> Point {
        Point::new(self.neck_position_x, self.neck_position_y)
    }

    fn shoulder(&self, left: bool) -> Point {
        if left {
            Point::new(self.shoulder_left_x, self.shoulder_left_y)
        } else {
            Point::new(self.shoulder_right_x, self.shoulder_right_y)
        }
    }

    fn elbow(&self, left: bool) -> Point {
        if left {
            Point::new(self.elbow_left_x, self.elbow_left_y)
        } else {
            Point::new(self.elbow_right_x, self.elbow_right_y)
        }
    }

    fn hand(&self, left: bool) -> Point {
        if left {
            Point::new(self.hand_left_x, self.hand_left_y)
        } else {
            Point::new(self.hand_right_x, self.hand_right_y)
        }
    }

    fn hip(&self, left: bool) -> Point {
        if left {
            Point::new(self.hip_left_x, self.hip_left_y)
        } else {
            Point::new(self.hip_right_x, self.hip_right_y)
        }
    }

    fn knee(&self, left: bool) -> Point {
        if left {
            Point::new(self.knee_left_x, self.knee_left_y)
        } else {
            Point::new(self.knee_right_x, self.knee_right_y)
        }
    }

    fn foot(&self, left: bool) -> Point {
        if left {
            Point::new(self.foot_left_x, self.foot_left_y)
        } else {
            Point::new(self.foot_right_x, self.foot_right_y)
        }
    }

    /// Recovers an angle pose from the stored positions.
    ///
    /// The old format has a rigid torso and two-segment arms, so the
    /// mid-torso bend and the hand angles come out as zero. Segments of
    /// zero length carry no direction and also resolve to zero.
    pub fn to_pose(&self) -> Pose {
        let waist = self.hip(true).midpoint(self.hip(false));
        let neck = self.neck();

        let direction = |from: Point, to: Point, rest: f64| -> f64 {
            match angle_between(from, to) {
                Some(world) => wrap_degrees(world - rest),
                None => 0.0,
            }
        };

        let waist_torso = direction(waist, neck, UP_DEGREES);

        let head_angle = match angle_between(neck, self.head()) {
            Some(world) => wrap_degrees(right_to_up(world) - waist_torso),
            None => 0.0,
        };

        let arm_rest = DOWN_DEGREES + waist_torso;
        let left_shoulder = direction(self.shoulder(true), self.elbow(true), arm_rest);
        let right_shoulder = direction(self.shoulder(false), self.elbow(false), arm_rest);
        let left_elbow = direction(self.elbow(true), self.hand(true), arm_rest + left_shoulder);
        let right_elbow = direction(self.elbow(false), self.hand(false), arm_rest + right_shoulder);

        let left_knee = direction(self.hip(true), self.knee(true), DOWN_DEGREES);
        let right_knee = direction(self.hip(false), self.knee(false), DOWN_DEGREES);
        let left_foot = direction(self.knee(true), self.foot(true), DOWN_DEGREES + left_knee);
        let right_foot = direction(self.knee(false), self.foot(false), DOWN_DEGREES + right_knee);

        let mut pose = Pose {
            waist,
            waist_torso_angle: waist_torso,
            mid_torso_angle: 0.0,
            head_angle,
            left_shoulder_angle: left_shoulder,
            right_shoulder_angle: right_shoulder,
            left_elbow_angle: left_elbow,
            right_elbow_angle: right_elbow,
            left_hand_angle: 0.0,
            right_hand_angle: 0.0,
            left_knee_angle: left_knee,
            right_knee_angle: right_knee,
            left_foot_angle: left_foot,
            right_foot_angle: right_foot,
            ..Pose::default()
        };
        pose.normalize();
        pose
    }
}

/// Decodes a point-format JSON document and converts it in one step.
pub fn import_point_pose(json: &str) -> Result<Pose, serde_json::Error> {
    let point_pose: PointPose = serde_json::from_str(json)?;
    Ok(point_pose.to_pose())
}
