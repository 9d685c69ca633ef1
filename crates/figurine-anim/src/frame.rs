//! Animation frames: a named, numbered pose snapshot plus scene props.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use figurine_pose::geom::Point;
use figurine_pose::validation::validate_pose_at;
use figurine_pose::{ErrorCode, HexColor, Pose, ValidationError, ValidationResult};

// ============================================================================
// Props
// ============================================================================

/// Shape of a scene prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    Ball,
    Box,
    Stick,
    /// An image prop; the asset name lives in [`Prop::image`].
    Image,
}

fn default_prop_scale() -> f64 {
    1.0
}

fn default_prop_size() -> f64 {
    40.0
}

fn default_prop_color() -> HexColor {
    HexColor::black()
}

/// A non-figure object placed in a frame. Props have no kinematics;
/// they carry a position, size, rotation, and uniform scale of their
/// own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub id: Uuid,
    pub kind: PropKind,
    pub position: Point,
    #[serde(default = "default_prop_size")]
    pub width: f64,
    #[serde(default = "default_prop_size")]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_prop_scale")]
    pub scale: f64,
    #[serde(default = "default_prop_color")]
    pub color: HexColor,
    /// Asset name for [`PropKind::Image`] props.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Prop {
    pub fn new(kind: PropKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            width: default_prop_size(),
            height: default_prop_size(),
            rotation: 0.0,
            scale: 1.0,
            color: HexColor::black(),
            image: None,
        }
    }
}

// ============================================================================
// Frames
// ============================================================================

/// One saved animation frame.
///
/// Frames are addressed two ways: by their stable `id` (edits and
/// deletes) and by the `(name, number)` pair (playback sequences).
/// Nothing enforces uniqueness of the pair; lookups resolve the first
/// match in merge order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: Uuid,
    /// Animation this frame belongs to, e.g. `"Run"`.
    pub name: String,
    /// Position within the animation, starting at 0.
    pub number: i32,
    pub pose: Pose,
    /// Older frames predate props and omit the array entirely.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<Prop>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Frame {
    pub fn new(name: impl Into<String>, number: i32, pose: Pose) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number,
            pose,
            props: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_props(mut self, props: Vec<Prop>) -> Self {
        self.props = props;
        self
    }

    /// `"Run #3"` style display reference.
    pub fn reference(&self) -> String {
        format!("{} #{}", self.name, self.number)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validates one frame, reporting paths under `frames[index]`.
pub fn validate_frame_at(frame: &Frame, index: usize) -> ValidationResult {
    let prefix = format!("frames[{index}]");
    let mut result = ValidationResult::success();

    if frame.name.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyFrameName,
            "frame name must not be empty",
            format!("{prefix}.name"),
        ));
    }
    if frame.number < 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::FrameNumberOutOfRange,
            format!("frame number {} must not be negative", frame.number),
            format!("{prefix}.number"),
        ));
    }

    result.merge(validate_pose_at(&frame.pose, &format!("{prefix}.pose")));

    for (i, prop) in frame.props.iter().enumerate() {
        for (field, value) in [
            ("position.x", prop.position.x),
            ("position.y", prop.position.y),
            ("width", prop.width),
            ("height", prop.height),
            ("rotation", prop.rotation),
            ("scale", prop.scale),
        ] {
            if !value.is_finite() {
                result.add_error(ValidationError::with_path(
                    ErrorCode::NonFiniteValue,
                    format!("value is {value}"),
                    format!("{prefix}.props[{i}].{field}"),
                ));
            }
        }
    }

    result
}

/// Validates a whole frame list.
pub fn validate_frames(frames: &[Frame]) -> ValidationResult {
    let mut result = ValidationResult::success();
    for (index, frame) in frames.iter().enumerate() {
        result.merge(validate_frame_at(frame, index));
    }
    result
}
