//! Legacy point-format files through to playable frames.

use figurine_anim::{AnimationPlayer, Frame, FrameStore, MemoryStore};
use figurine_pose::legacy::import_point_pose;
use figurine_pose::SegmentLengths;
use figurine_tests::fixtures::legacy_pose_json;
use pretty_assertions::assert_eq;

#[test]
fn imported_pose_lands_near_the_stored_points() {
    let pose = import_point_pose(&legacy_pose_json()).unwrap();
    let layout = pose.evaluate(&SegmentLengths::default());

    // The root is the hip midpoint of the stored figure.
    assert!((layout.waist.x - 200.0).abs() < 1e-6);
    assert!((layout.waist.y - 225.0).abs() < 1e-6);

    // Leg directions survive the conversion even though the legacy
    // segment lengths differ from the canonical skeleton: the left
    // knee was stored left of its hip and the right knee to the right.
    assert!(layout.left_knee.x < layout.left_hip.x);
    assert!(layout.right_knee.x > layout.right_hip.x);

    // Both elbows were stored outside the shoulders.
    assert!(layout.left_elbow.x < layout.neck.x);
    assert!(layout.right_elbow.x > layout.neck.x);
}

#[test]
fn imported_pose_is_normalized_and_valid() {
    let pose = import_point_pose(&legacy_pose_json()).unwrap();
    let result = figurine_pose::validate_pose(&pose);
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn an_imported_frame_is_immediately_playable() {
    let pose = import_point_pose(&legacy_pose_json()).unwrap();
    let mut store = FrameStore::new(MemoryStore::new());
    let frame = Frame::new("Imported", 1, pose.clone());
    store.save_frame(frame).unwrap();

    let mut player = AnimationPlayer::new();
    let first = player.play(&store, "Imported", &[1], false).unwrap();
    assert_eq!(first.unwrap().pose, pose);
    assert!(!player.is_playing());
}

#[test]
fn malformed_legacy_documents_are_rejected() {
    assert!(import_point_pose("not json").is_err());
    assert!(import_point_pose(r#"{"headPositionX": 1.0}"#).is_err());
}
