//! Shared fixture builders for the integration tests.

use figurine_anim::{Frame, FrameStore, MemoryStore, Prop, PropKind};
use figurine_pose::geom::Point;
use figurine_pose::Pose;

/// A pose that is visibly not the default: leaning torso, raised arm,
/// bent leg.
pub fn action_pose() -> Pose {
    Pose {
        waist_torso_angle: 18.0,
        mid_torso_angle: -6.0,
        head_angle: 25.0,
        left_shoulder_angle: 120.0,
        left_elbow_angle: -35.0,
        right_knee_angle: 40.0,
        right_foot_angle: -20.0,
        ..Pose::default()
    }
}

/// A frame of the `Run` animation with the given number.
pub fn run_frame(number: i32) -> Frame {
    Frame::new("Run", number, action_pose())
}

/// A frame carrying one ball prop.
pub fn frame_with_prop(name: &str, number: i32) -> Frame {
    Frame::new(name, number, Pose::default())
        .with_props(vec![Prop::new(PropKind::Ball, Point::new(120.0, 310.0))])
}

/// An in-memory store holding `Run` frames 1..=count.
pub fn run_store(count: i32) -> FrameStore<MemoryStore> {
    let mut store = FrameStore::new(MemoryStore::new());
    for number in 1..=count {
        store
            .save_frame(run_frame(number))
            .expect("in-memory save cannot fail");
    }
    store
}

/// A legacy point-format pose document using the original field names.
pub fn legacy_pose_json() -> String {
    r#"{
        "headPositionX": 200.0, "headPositionY": 110.0,
        "neckPositionX": 200.0, "neckPositionY": 125.0,
        "shoulderLeftX": 185.0, "shoulderLeftY": 130.0,
        "shoulderRightX": 215.0, "shoulderRightY": 130.0,
        "elbowLeftX": 175.0, "elbowLeftY": 152.0,
        "elbowRightX": 225.0, "elbowRightY": 152.0,
        "handLeftX": 170.0, "handLeftY": 178.0,
        "handRightX": 230.0, "handRightY": 178.0,
        "hipLeftX": 192.5, "hipLeftY": 225.0,
        "hipRightX": 207.5, "hipRightY": 225.0,
        "kneeLeftX": 188.0, "kneeLeftY": 258.0,
        "kneeRightX": 212.0, "kneeRightY": 258.0,
        "footLeftX": 185.0, "footLeftY": 288.0,
        "footRightX": 215.0, "footRightY": 288.0,
        "frontArmIsLeft": true, "frontLegIsLeft": true
    }"#
    .to_owned()
}
