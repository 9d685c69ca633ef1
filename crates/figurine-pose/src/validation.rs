//! Structural validation of poses.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::geom::wrap_degrees;
use crate::pose::{Pose, MIN_SCALE};

/// Validates one pose, reporting field paths relative to `prefix`
/// (empty for a standalone pose, `frames[3].pose` inside a document).
pub fn validate_pose_at(pose: &Pose, prefix: &str) -> ValidationResult {
    let mut result = ValidationResult::success();
    let path = |field: &str| {
        if prefix.is_empty() {
            field.to_owned()
        } else {
            format!("{prefix}.{field}")
        }
    };

    let angles = [
        ("waist_torso_angle", pose.waist_torso_angle),
        ("mid_torso_angle", pose.mid_torso_angle),
        ("head_angle", pose.head_angle),
        ("left_shoulder_angle", pose.left_shoulder_angle),
        ("right_shoulder_angle", pose.right_shoulder_angle),
        ("left_elbow_angle", pose.left_elbow_angle),
        ("right_elbow_angle", pose.right_elbow_angle),
        ("left_hand_angle", pose.left_hand_angle),
        ("right_hand_angle", pose.right_hand_angle),
        ("left_knee_angle", pose.left_knee_angle),
        ("right_knee_angle", pose.right_knee_angle),
        ("left_foot_angle", pose.left_foot_angle),
        ("right_foot_angle", pose.right_foot_angle),
    ];

    for (field, value) in angles {
        if !value.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteValue,
                format!("angle is {value}"),
                path(field),
            ));
        } else if value != wrap_degrees(value) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnwrappedAngle,
                format!("angle {value} lies outside (-180, 180]"),
                path(field),
            ));
        }
    }

    for (field, value) in [
        ("waist.x", pose.waist.x),
        ("waist.y", pose.waist.y),
        ("head_radius_multiplier", pose.head_radius_multiplier),
        ("appearance.stroke_thickness", pose.appearance.stroke_thickness),
    ] {
        if !value.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteValue,
                format!("value is {value}"),
                path(field),
            ));
        }
    }

    if !pose.scale.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteValue,
            format!("scale is {}", pose.scale),
            path("scale"),
        ));
    } else if pose.scale < MIN_SCALE {
        result.add_error(ValidationError::with_path(
            ErrorCode::ScaleOutOfRange,
            format!("scale {} is below the minimum {MIN_SCALE}", pose.scale),
            path("scale"),
        ));
    }

    result
}

/// Validates a standalone pose.
pub fn validate_pose(pose: &Pose) -> ValidationResult {
    validate_pose_at(pose, "")
}
