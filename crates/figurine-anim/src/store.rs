//! Two-tier frame persistence.
//!
//! Frames come from two places: a read-only authoritative document
//! bundled with the app, and a mutable overlay kept in key-value
//! storage. The merged view deduplicates by frame id with the
//! authoritative tier winning, so shipping an updated bundle silently
//! supersedes a user's stale copy of the same frame.
//!
//! Loads are soft: a missing or corrupt tier decodes to an empty list
//! rather than an error, because a broken save must never wedge the
//! editor at startup. Writes rewrite the whole overlay at once.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use figurine_pose::{Pose, ValidationWarning, WarningCode};

use crate::frame::Frame;

/// Overlay frames, rewritten wholesale on every mutation.
pub const OVERLAY_KEY: &str = "saved_animation_frames";
/// Working pose restored when an editing session reopens.
pub const WORKING_POSE_KEY: &str = "last_figure_state";
/// Ids of frames marked for export.
pub const EXPORT_MARKS_KEY: &str = "persisted_frame_ids";

// ============================================================================
// Key-value backends
// ============================================================================

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no overlay frame at index {0}")]
    IndexOutOfRange(usize),
}

/// Minimal key-value backend behind the overlay tier. Production code
/// backs this with files; tests use the in-memory implementation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Frame store
// ============================================================================

/// Merged view over the authoritative tier and the overlay.
#[derive(Debug)]
pub struct FrameStore<S: KeyValueStore> {
    authoritative: Vec<Frame>,
    overlay: Vec<Frame>,
    marked: HashSet<Uuid>,
    kv: S,
}

impl<S: KeyValueStore> FrameStore<S> {
    /// Opens a store with no authoritative tier.
    pub fn new(kv: S) -> Self {
        Self::with_authoritative_json(kv, "")
    }

    /// Opens a store over `kv`, seeding the read-only tier from a JSON
    /// frame array. An empty or unparseable document yields an empty
    /// tier; startup never fails on bad data.
    pub fn with_authoritative_json(kv: S, authoritative_json: &str) -> Self {
        let authoritative = decode_frames(authoritative_json.as_bytes());
        let overlay = kv
            .get(OVERLAY_KEY)
            .map(|bytes| decode_frames(&bytes))
            .unwrap_or_default();
        let marked = kv
            .get(EXPORT_MARKS_KEY)
            .and_then(|bytes| serde_json::from_slice::<Vec<Uuid>>(&bytes).ok())
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default();
        Self {
            authoritative,
            overlay,
            marked,
            kv,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All frames in merge order: authoritative first, then overlay
    /// frames whose id is not shadowed by the authoritative tier.
    pub fn frames(&self) -> Vec<&Frame> {
        let shadowed: HashSet<Uuid> = self.authoritative.iter().map(|f| f.id).collect();
        self.authoritative
            .iter()
            .chain(self.overlay.iter().filter(|f| !shadowed.contains(&f.id)))
            .collect()
    }

    /// First frame matching `(name, number)` in merge order. The pair
    /// is not unique; callers get a deterministic first match.
    pub fn lookup(&self, name: &str, number: i32) -> Option<&Frame> {
        self.frames()
            .into_iter()
            .find(|f| f.name == name && f.number == number)
    }

    pub fn by_id(&self, id: Uuid) -> Option<&Frame> {
        self.frames().into_iter().find(|f| f.id == id)
    }

    /// Frames of one animation, ordered by frame number.
    pub fn frames_for(&self, name: &str) -> Vec<&Frame> {
        let mut frames: Vec<&Frame> = self
            .frames()
            .into_iter()
            .filter(|f| f.name == name)
            .collect();
        frames.sort_by_key(|f| f.number);
        frames
    }

    /// Distinct animation names, sorted.
    pub fn animation_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .frames()
            .into_iter()
            .map(|f| f.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn overlay_frames(&self) -> &[Frame] {
        &self.overlay
    }

    /// Warns for every `(name, number)` pair claimed by more than one
    /// frame in the merged view.
    pub fn duplicate_references(&self) -> Vec<ValidationWarning> {
        let mut seen: HashSet<(String, i32)> = HashSet::new();
        let mut reported: HashSet<(String, i32)> = HashSet::new();
        let mut warnings = Vec::new();
        for frame in self.frames() {
            let key = (frame.name.clone(), frame.number);
            if !seen.insert(key.clone()) && reported.insert(key) {
                warnings.push(ValidationWarning::new(
                    WarningCode::DuplicateFrameReference,
                    format!("more than one frame answers to {}", frame.reference()),
                ));
            }
        }
        warnings
    }

    // ------------------------------------------------------------------
    // Overlay mutations
    // ------------------------------------------------------------------

    /// Saves a frame into the overlay, replacing any overlay frame with
    /// the same id, and persists the overlay.
    pub fn save_frame(&mut self, mut frame: Frame) -> Result<(), StoreError> {
        frame.pose.normalize();
        match self.overlay.iter_mut().find(|f| f.id == frame.id) {
            Some(existing) => *existing = frame,
            None => self.overlay.push(frame),
        }
        self.persist_overlay()
    }

    /// Deletes an overlay frame by id. Authoritative frames are
    /// read-only; deleting one returns `Ok(false)` and changes nothing.
    pub fn delete_frame(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.overlay.len();
        self.overlay.retain(|f| f.id != id);
        if self.overlay.len() == before {
            return Ok(false);
        }
        if self.marked.remove(&id) {
            self.persist_marks()?;
        }
        self.persist_overlay()?;
        Ok(true)
    }

    /// Reorders the overlay, moving the frame at `from` to `to`.
    pub fn move_frame(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        if from >= self.overlay.len() {
            return Err(StoreError::IndexOutOfRange(from));
        }
        if to >= self.overlay.len() {
            return Err(StoreError::IndexOutOfRange(to));
        }
        let frame = self.overlay.remove(from);
        self.overlay.insert(to, frame);
        self.persist_overlay()
    }

    fn persist_overlay(&mut self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.overlay)?;
        self.kv.set(OVERLAY_KEY, &bytes)
    }

    // ------------------------------------------------------------------
    // Export marks
    // ------------------------------------------------------------------

    pub fn mark_for_export(&mut self, id: Uuid) -> Result<(), StoreError> {
        if self.marked.insert(id) {
            self.persist_marks()?;
        }
        Ok(())
    }

    pub fn unmark_for_export(&mut self, id: Uuid) -> Result<(), StoreError> {
        if self.marked.remove(&id) {
            self.persist_marks()?;
        }
        Ok(())
    }

    pub fn is_marked(&self, id: Uuid) -> bool {
        self.marked.contains(&id)
    }

    /// Marked frames in merge order.
    pub fn marked_frames(&self) -> Vec<&Frame> {
        self.frames()
            .into_iter()
            .filter(|f| self.marked.contains(&f.id))
            .collect()
    }

    fn persist_marks(&mut self) -> Result<(), StoreError> {
        // Sorted so the stored list is stable across runs.
        let mut ids: Vec<Uuid> = self.marked.iter().copied().collect();
        ids.sort();
        let bytes = serde_json::to_vec(&ids)?;
        self.kv.set(EXPORT_MARKS_KEY, &bytes)
    }

    // ------------------------------------------------------------------
    // Session pose
    // ------------------------------------------------------------------

    /// Persists the in-progress editing pose for session restore.
    pub fn save_working_pose(&mut self, pose: &Pose) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(pose)?;
        self.kv.set(WORKING_POSE_KEY, &bytes)
    }

    /// Restores the working pose, or `None` when absent or corrupt.
    pub fn load_working_pose(&self) -> Option<Pose> {
        let bytes = self.kv.get(WORKING_POSE_KEY)?;
        let mut pose: Pose = serde_json::from_slice(&bytes).ok()?;
        pose.normalize();
        Some(pose)
    }
}

/// Soft frame-array decode: anything unparseable is an empty list.
fn decode_frames(bytes: &[u8]) -> Vec<Frame> {
    if bytes.is_empty() {
        return Vec::new();
    }
    serde_json::from_slice(bytes).unwrap_or_default()
}
