//! The joint hierarchy and the fixed segment lengths of the figure.

use serde::{Deserialize, Serialize};

// ============================================================================
// Joints
// ============================================================================

/// Every articulation point of the figure.
///
/// Arms carry three segments (upper arm, forearm, hand), legs carry two
/// (upper leg, lower leg). The shoulders both attach at the neck, and
/// the hips attach at fixed horizontal offsets from the waist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Waist,
    MidTorso,
    Neck,
    Head,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHand,
    RightHand,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftFoot,
    RightFoot,
}

impl Joint {
    /// All joints, root first.
    pub const ALL: [Joint; 18] = [
        Joint::Waist,
        Joint::MidTorso,
        Joint::Neck,
        Joint::Head,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftHand,
        Joint::RightHand,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftFoot,
        Joint::RightFoot,
    ];

    /// Parent joint in the kinematic chain, `None` for the root.
    ///
    /// Legs parent to the hips rather than to the rotated torso: knee
    /// and foot angles never inherit upper-body rotation, so a waist
    /// bend leans the torso over planted legs instead of sweeping them.
    pub fn parent(self) -> Option<Joint> {
        match self {
            Joint::Waist => None,
            Joint::MidTorso => Some(Joint::Waist),
            Joint::Neck => Some(Joint::MidTorso),
            Joint::Head => Some(Joint::Neck),
            Joint::LeftShoulder | Joint::RightShoulder => Some(Joint::Neck),
            Joint::LeftElbow => Some(Joint::LeftShoulder),
            Joint::RightElbow => Some(Joint::RightShoulder),
            Joint::LeftWrist => Some(Joint::LeftElbow),
            Joint::RightWrist => Some(Joint::RightElbow),
            Joint::LeftHand => Some(Joint::LeftWrist),
            Joint::RightHand => Some(Joint::RightWrist),
            Joint::LeftHip | Joint::RightHip => Some(Joint::Waist),
            Joint::LeftKnee => Some(Joint::LeftHip),
            Joint::RightKnee => Some(Joint::RightHip),
            Joint::LeftFoot => Some(Joint::LeftKnee),
            Joint::RightFoot => Some(Joint::RightKnee),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Joint::Waist => "waist",
            Joint::MidTorso => "mid_torso",
            Joint::Neck => "neck",
            Joint::Head => "head",
            Joint::LeftShoulder => "left_shoulder",
            Joint::RightShoulder => "right_shoulder",
            Joint::LeftElbow => "left_elbow",
            Joint::RightElbow => "right_elbow",
            Joint::LeftWrist => "left_wrist",
            Joint::RightWrist => "right_wrist",
            Joint::LeftHand => "left_hand",
            Joint::RightHand => "right_hand",
            Joint::LeftHip => "left_hip",
            Joint::RightHip => "right_hip",
            Joint::LeftKnee => "left_knee",
            Joint::RightKnee => "right_knee",
            Joint::LeftFoot => "left_foot",
            Joint::RightFoot => "right_foot",
        }
    }
}

// ============================================================================
// Segment lengths
// ============================================================================

/// Bone lengths in base-canvas units. These are fixed properties of the
/// figure; poses scale them uniformly through their `scale` field at
/// render time, never per-segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentLengths {
    pub torso: f64,
    pub neck: f64,
    pub head_radius: f64,
    pub upper_arm: f64,
    pub forearm: f64,
    pub hand: f64,
    pub upper_leg: f64,
    pub lower_leg: f64,
    /// Length of the drawn foot pad. Not part of the kinematic chain;
    /// renderers extend it from the foot joint along the lower leg.
    pub foot: f64,
    pub shoulder_width: f64,
}

impl Default for SegmentLengths {
    fn default() -> Self {
        Self {
            torso: 50.0,
            neck: 15.0,
            head_radius: 12.0,
            upper_arm: 25.0,
            forearm: 26.0,
            hand: 8.0,
            upper_leg: 34.0,
            lower_leg: 30.0,
            foot: 10.0,
            shoulder_width: 30.0,
        }
    }
}

impl SegmentLengths {
    /// Horizontal distance from the waist to each hip attachment.
    pub fn hip_offset(&self) -> f64 {
        self.shoulder_width / 4.0
    }
}
