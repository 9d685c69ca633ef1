//! Angle inference for direct manipulation.
//!
//! Dragging a joint handle never moves a stored point. The solver takes
//! the drag target, measures the world direction from the handle's
//! parent joint to the target, subtracts the accumulated rotation of
//! the ancestor chain, and writes the wrapped local angle back into the
//! pose. Forward kinematics then re-derives every position, so segment
//! lengths are preserved by construction.

use serde::{Deserialize, Serialize};

use crate::geom::{
    angle_between, right_to_up, smooth_angle, wrap_degrees, Point, DOWN_DEGREES, UP_DEGREES,
};
use crate::pose::{Pose, PoseLayout};
use crate::skeleton::SegmentLengths;

// ============================================================================
// Handles
// ============================================================================

/// Joints the user can grab. Each handle steers exactly one angle
/// (except the two torso handles, which both steer the waist hinge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHandle {
    Waist,
    MidTorso,
    Neck,
    Head,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftHand,
    RightHand,
    LeftKnee,
    RightKnee,
    LeftFoot,
    RightFoot,
}

impl DragHandle {
    /// Position the handle is drawn at in the current layout.
    pub fn anchor(self, layout: &PoseLayout) -> Point {
        match self {
            DragHandle::Waist => layout.waist,
            DragHandle::MidTorso => layout.mid_torso,
            DragHandle::Neck => layout.neck,
            DragHandle::Head => layout.head,
            DragHandle::LeftShoulder => layout.left_elbow,
            DragHandle::RightShoulder => layout.right_elbow,
            DragHandle::LeftElbow => layout.left_wrist,
            DragHandle::RightElbow => layout.right_wrist,
            DragHandle::LeftHand => layout.left_hand,
            DragHandle::RightHand => layout.right_hand,
            DragHandle::LeftKnee => layout.left_knee,
            DragHandle::RightKnee => layout.right_knee,
            DragHandle::LeftFoot => layout.left_foot,
            DragHandle::RightFoot => layout.right_foot,
        }
    }

    /// Pivot the drag direction is measured from.
    fn pivot(self, layout: &PoseLayout) -> Point {
        match self {
            DragHandle::Waist | DragHandle::MidTorso | DragHandle::Neck => layout.mid_torso,
            DragHandle::Head => layout.neck,
            DragHandle::LeftShoulder | DragHandle::RightShoulder => layout.neck,
            DragHandle::LeftElbow => layout.left_elbow,
            DragHandle::RightElbow => layout.right_elbow,
            DragHandle::LeftHand => layout.left_wrist,
            DragHandle::RightHand => layout.right_wrist,
            DragHandle::LeftKnee => layout.left_hip,
            DragHandle::RightKnee => layout.right_hip,
            DragHandle::LeftFoot => layout.left_knee,
            DragHandle::RightFoot => layout.right_knee,
        }
    }
}

// ============================================================================
// Tuning
// ============================================================================

/// Damping parameters for the touchy handles. The torso handles move a
/// long lever arm, so raw cursor direction is smoothed before commit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DragTuning {
    /// Smoothing fraction applied per sample when the waist handle
    /// steers the waist hinge.
    pub waist_alpha: f64,
    /// Smoothing fraction for the mid-torso handle (lighter damping,
    /// shorter lever).
    pub mid_torso_alpha: f64,
    /// Scale applied to incremental waist rotation deltas.
    pub waist_sensitivity: f64,
}

impl Default for DragTuning {
    fn default() -> Self {
        Self {
            waist_alpha: 0.1,
            mid_torso_alpha: 0.3,
            waist_sensitivity: 0.15,
        }
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Stateful drag interpreter. One solver serves one editing surface;
/// the smoothing baselines persist across a gesture and are committed
/// when it ends.
#[derive(Debug, Clone)]
pub struct DragSolver {
    tuning: DragTuning,
    /// Baseline for waist smoothing, committed on gesture end.
    last_waist_angle: f64,
    /// Baseline for mid-torso smoothing, committed on gesture end.
    last_mid_torso_angle: f64,
    /// Previous sample of an incremental waist rotation gesture.
    last_cursor: Option<Point>,
}

impl DragSolver {
    pub fn new(tuning: DragTuning) -> Self {
        Self {
            tuning,
            last_waist_angle: 0.0,
            last_mid_torso_angle: 0.0,
            last_cursor: None,
        }
    }

    pub fn tuning(&self) -> DragTuning {
        self.tuning
    }

    /// Applies one drag sample for `handle` toward `target`, updating
    /// the pose's angles in place.
    ///
    /// A target coinciding with the pivot has no direction; the sample
    /// is dropped and the previous angle is retained.
    pub fn drag(
        &mut self,
        pose: &mut Pose,
        handle: DragHandle,
        target: Point,
        lengths: &SegmentLengths,
    ) {
        let layout = pose.evaluate(lengths);
        let Some(world) = angle_between(handle.pivot(&layout), target) else {
            return;
        };
        let torso_rotation = pose.waist_torso_angle + pose.mid_torso_angle;

        match handle {
            DragHandle::Waist => {
                let raw = wrap_degrees(world - (UP_DEGREES + pose.mid_torso_angle));
                let damped = smooth_angle(self.last_waist_angle, raw, self.tuning.waist_alpha);
                pose.waist_torso_angle = damped;
                self.last_waist_angle = damped;
            }
            DragHandle::MidTorso => {
                let raw = wrap_degrees(world - (UP_DEGREES + pose.mid_torso_angle));
                let damped =
                    smooth_angle(self.last_mid_torso_angle, raw, self.tuning.mid_torso_alpha);
                pose.waist_torso_angle = damped;
                self.last_mid_torso_angle = damped;
            }
            DragHandle::Neck => {
                pose.mid_torso_angle =
                    wrap_degrees(world - (UP_DEGREES + pose.waist_torso_angle));
            }
            DragHandle::Head => {
                // Head facing lives in the up basis and excludes the
                // torso rotation it rides on.
                pose.head_angle = wrap_degrees(right_to_up(world) - torso_rotation);
            }
            DragHandle::LeftShoulder => {
                pose.left_shoulder_angle =
                    wrap_degrees(world - (DOWN_DEGREES + torso_rotation));
            }
            DragHandle::RightShoulder => {
                pose.right_shoulder_angle =
                    wrap_degrees(world - (DOWN_DEGREES + torso_rotation));
            }
            DragHandle::LeftElbow => {
                pose.left_elbow_angle = wrap_degrees(
                    world - (DOWN_DEGREES + torso_rotation + pose.left_shoulder_angle),
                );
            }
            DragHandle::RightElbow => {
                pose.right_elbow_angle = wrap_degrees(
                    world - (DOWN_DEGREES + torso_rotation + pose.right_shoulder_angle),
                );
            }
            DragHandle::LeftHand => {
                pose.left_hand_angle = wrap_degrees(
                    world
                        - (DOWN_DEGREES
                            + torso_rotation
                            + pose.left_shoulder_angle
                            + pose.left_elbow_angle),
                );
            }
            DragHandle::RightHand => {
                pose.right_hand_angle = wrap_degrees(
                    world
                        - (DOWN_DEGREES
                            + torso_rotation
                            + pose.right_shoulder_angle
                            + pose.right_elbow_angle),
                );
            }
            // Legs are measured straight from the hips, so a leaning
            // torso never drags the feet along.
            DragHandle::LeftKnee => {
                pose.left_knee_angle = wrap_degrees(world - DOWN_DEGREES);
            }
            DragHandle::RightKnee => {
                pose.right_knee_angle = wrap_degrees(world - DOWN_DEGREES);
            }
            DragHandle::LeftFoot => {
                pose.left_foot_angle =
                    wrap_degrees(world - (DOWN_DEGREES + pose.left_knee_angle));
            }
            DragHandle::RightFoot => {
                pose.right_foot_angle =
                    wrap_degrees(world - (DOWN_DEGREES + pose.right_knee_angle));
            }
        }
    }

    /// Incremental waist rotation: each cursor sample contributes its
    /// direction from the previous sample, scaled down by the tuning
    /// sensitivity and accumulated onto the waist hinge.
    pub fn rotate_waist_incremental(&mut self, pose: &mut Pose, cursor: Point) {
        if let Some(previous) = self.last_cursor {
            let dx = cursor.x - previous.x;
            let dy = cursor.y - previous.y;
            if dx != 0.0 || dy != 0.0 {
                let step = dx.atan2(-dy).to_degrees() * self.tuning.waist_sensitivity;
                pose.waist_torso_angle = wrap_degrees(pose.waist_torso_angle + step);
            }
        }
        self.last_cursor = Some(cursor);
    }

    /// Ends the active gesture, committing the pose's torso angles as
    /// the smoothing baselines for the next one.
    pub fn end_drag(&mut self, pose: &Pose) {
        self.last_waist_angle = pose.waist_torso_angle;
        self.last_mid_torso_angle = pose.waist_torso_angle;
        self.last_cursor = None;
    }
}

impl Default for DragSolver {
    fn default() -> Self {
        Self::new(DragTuning::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
