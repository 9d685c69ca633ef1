//! End-to-end store behavior: tier merge, persistence across reopen,
//! and file-backed overlays.

use figurine_anim::{FileStore, Frame, FrameStore, MemoryStore, OVERLAY_KEY};
use figurine_pose::Pose;
use figurine_tests::fixtures::{action_pose, run_frame};
use pretty_assertions::assert_eq;

#[test]
fn authoritative_frames_shadow_stale_overlay_copies() {
    let shipped = run_frame(1);
    let mut stale = shipped.clone();
    stale.pose = Pose::default();
    stale.number = 42;

    let mut seed = FrameStore::new(MemoryStore::new());
    seed.save_frame(stale).unwrap();
    seed.save_frame(run_frame(2)).unwrap();
    let overlay_bytes = serde_json::to_vec(seed.overlay_frames()).unwrap();

    let mut kv = MemoryStore::new();
    use figurine_anim::KeyValueStore;
    kv.set(OVERLAY_KEY, &overlay_bytes).unwrap();

    let authoritative = serde_json::to_string(&vec![shipped.clone()]).unwrap();
    let store = FrameStore::with_authoritative_json(kv, &authoritative);

    // The stale copy of the shipped frame is gone; the unrelated
    // overlay frame survives.
    assert_eq!(store.frames().len(), 2);
    let resolved = store.by_id(shipped.id).unwrap();
    assert_eq!(resolved.number, 1);
    assert_eq!(resolved.pose, shipped.pose);
    assert!(store.lookup("Run", 42).is_none());
    assert!(store.lookup("Run", 2).is_some());
}

#[test]
fn a_full_editing_session_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let saved_id;
    {
        let mut store = FrameStore::new(FileStore::new(dir.path()));
        let frame = run_frame(1);
        saved_id = frame.id;
        store.save_frame(frame).unwrap();
        store.save_frame(run_frame(2)).unwrap();
        store.mark_for_export(saved_id).unwrap();
        store.save_working_pose(&action_pose()).unwrap();
    }

    let reopened = FrameStore::new(FileStore::new(dir.path()));
    assert_eq!(reopened.frames().len(), 2);
    assert!(reopened.is_marked(saved_id));
    assert_eq!(reopened.load_working_pose().unwrap(), action_pose());
}

#[test]
fn duplicate_references_are_reported_but_resolvable() {
    let mut store = FrameStore::new(MemoryStore::new());
    let first = run_frame(1);
    let second = Frame::new("Run", 1, Pose::default());
    store.save_frame(first.clone()).unwrap();
    store.save_frame(second).unwrap();

    assert_eq!(store.duplicate_references().len(), 1);
    // Deterministic first match in merge order.
    assert_eq!(store.lookup("Run", 1).unwrap().id, first.id);
}

#[test]
fn corrupt_overlay_files_never_block_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{OVERLAY_KEY}.json")), b"{{{").unwrap();

    let store = FrameStore::new(FileStore::new(dir.path()));
    assert!(store.frames().is_empty());
}
