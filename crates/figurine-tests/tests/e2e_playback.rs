//! Playback scenarios against a populated store.

use figurine_anim::{AnimationPlayer, Frame, FrameStore, MemoryStore, PlayerError};
use figurine_pose::Pose;
use figurine_tests::fixtures::run_store;
use pretty_assertions::assert_eq;

fn rendered(frame: Option<&Frame>) -> Option<i32> {
    frame.map(|f| f.number)
}

#[test]
fn one_shot_pass_renders_the_whole_sequence_in_order() {
    let store = run_store(3);
    let mut player = AnimationPlayer::new();

    let mut seen = Vec::new();
    seen.push(rendered(player.play(&store, "Run", &[1, 2, 3, 2], false).unwrap()));
    while player.is_playing() {
        seen.push(rendered(player.tick(&store)));
    }

    assert_eq!(seen, vec![Some(1), Some(2), Some(3), Some(2)]);
    assert_eq!(player.tick(&store), None);
}

#[test]
fn looped_playback_runs_until_stopped() {
    let store = run_store(2);
    let mut player = AnimationPlayer::new();

    player.play(&store, "Run", &[1, 2], true).unwrap();
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(rendered(player.tick(&store)));
    }
    assert_eq!(
        seen,
        vec![Some(2), Some(1), Some(2), Some(1), Some(2), Some(1)]
    );

    player.stop();
    assert!(!player.is_playing());
    // Playback restarts from the first sequence entry after a stop.
    let first = player.play(&store, "Run", &[1, 2], true).unwrap();
    assert_eq!(rendered(first), Some(1));
}

#[test]
fn sequences_may_revisit_frames_and_skip_missing_ones() {
    let store = run_store(2);
    let mut player = AnimationPlayer::new();

    // Frame 9 does not exist; the step still consumes a tick.
    let mut seen = Vec::new();
    seen.push(rendered(player.play(&store, "Run", &[2, 9, 2], false).unwrap()));
    while player.is_playing() {
        seen.push(rendered(player.tick(&store)));
    }
    assert_eq!(seen, vec![Some(2), None, Some(2)]);
}

#[test]
fn playback_reads_the_merged_store_view() {
    let shipped = Frame::new("Walk", 1, Pose::default());
    let authoritative = serde_json::to_string(&vec![shipped.clone()]).unwrap();
    let mut store = FrameStore::with_authoritative_json(MemoryStore::new(), &authoritative);
    store.save_frame(Frame::new("Walk", 2, Pose::default())).unwrap();

    let mut player = AnimationPlayer::new();
    let first = player.play(&store, "Walk", &[1, 2], false).unwrap();
    assert_eq!(first.unwrap().id, shipped.id);
    assert_eq!(rendered(player.tick(&store)), Some(2));
    assert!(!player.is_playing());
}

#[test]
fn invalid_playback_requests_leave_the_player_idle() {
    let store = run_store(1);
    let mut player = AnimationPlayer::new();
    assert_eq!(
        player.play(&store, "  ", &[1], false).unwrap_err(),
        PlayerError::EmptyName
    );
    assert_eq!(
        player.play(&store, "Run", &[], true).unwrap_err(),
        PlayerError::EmptySequence
    );
    assert!(!player.is_playing());
    assert_eq!(player.tick(&store), None);
}
