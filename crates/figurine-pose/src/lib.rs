//! Figurine Pose Library
//!
//! This crate models a 2D articulated stick figure as a root position
//! plus local joint angles, and derives every joint position through
//! forward kinematics. Poses are the unit of persistence and playback
//! in the companion `figurine-anim` crate.
//!
//! # Overview
//!
//! - A [`Pose`] is pure state: thirteen local angles, a waist position,
//!   a render scale, and appearance styling. No positions are stored.
//! - [`Pose::evaluate`] turns a pose and a set of [`SegmentLengths`]
//!   into a [`PoseLayout`] of world positions, deterministically.
//! - [`DragSolver`] inverts that: it maps drag targets on joint handles
//!   back to local angles, with damping on the torso handles.
//! - [`legacy`] imports the older point-based save format.
//!
//! # Example
//!
//! ```
//! use figurine_pose::{DragHandle, DragSolver, Pose, SegmentLengths};
//! use figurine_pose::geom::Point;
//!
//! let lengths = SegmentLengths::default();
//! let mut pose = Pose::default();
//! let mut solver = DragSolver::default();
//!
//! // Drag the left knee handle out to the side.
//! solver.drag(&mut pose, DragHandle::LeftKnee, Point::new(150.0, 250.0), &lengths);
//!
//! // Positions are re-derived from the updated angles.
//! let layout = pose.evaluate(&lengths);
//! assert!(layout.left_knee.x < layout.left_hip.x);
//! ```
//!
//! # Modules
//!
//! - [`geom`]: Points, degree wrapping, smoothing, canvas mapping
//! - [`skeleton`]: Joint hierarchy and segment lengths
//! - [`pose`]: The pose type and forward kinematics
//! - [`appearance`]: Colors and stroke styling
//! - [`drag`]: Drag-based angle inference
//! - [`legacy`]: Point-based save format import
//! - [`error`]: Error and warning types for validation
//! - [`validation`]: Pose validation functions

pub mod appearance;
pub mod drag;
pub mod error;
pub mod geom;
pub mod legacy;
pub mod pose;
pub mod skeleton;
pub mod validation;

// Re-export commonly used types at the crate root
pub use appearance::{Appearance, ColorParseError, HexColor};
pub use drag::{DragHandle, DragSolver, DragTuning};
pub use error::{
    ErrorCode, PoseError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use geom::Point;
pub use legacy::PointPose;
pub use pose::{Pose, PoseLayout, MIN_SCALE};
pub use skeleton::{Joint, SegmentLengths};
pub use validation::validate_pose;
