//! Figurine Animation Library
//!
//! Persistence and playback for stick-figure animation frames built on
//! `figurine-pose`.
//!
//! # Overview
//!
//! - A [`Frame`] is a named, numbered pose snapshot with optional scene
//!   props and a creation timestamp.
//! - A [`FrameStore`] merges two tiers: a read-only authoritative JSON
//!   document and a mutable overlay behind a [`KeyValueStore`]. The
//!   authoritative tier wins on id collisions; loads are soft.
//! - [`export`] produces canonical sorted-key JSON, optionally off the
//!   calling thread.
//! - [`AnimationPlayer`] is a host-driven state machine: `play`, then
//!   `tick` at your own cadence, `stop` at any time.
//!
//! # Example
//!
//! ```
//! use figurine_anim::{AnimationPlayer, Frame, FrameStore, MemoryStore};
//! use figurine_pose::Pose;
//!
//! let mut store = FrameStore::new(MemoryStore::new());
//! store.save_frame(Frame::new("Run", 1, Pose::default()))?;
//! store.save_frame(Frame::new("Run", 2, Pose::default()))?;
//!
//! let mut player = AnimationPlayer::new();
//! let first = player.play(&store, "Run", &[1, 2], false)?;
//! assert_eq!(first.map(|f| f.number), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`frame`]: Frame and prop types, frame validation
//! - [`store`]: Two-tier frame store and key-value backends
//! - [`export`]: Canonical JSON export
//! - [`player`]: Playback state machine

pub mod export;
pub mod frame;
pub mod player;
pub mod store;

// Re-export commonly used types at the crate root
pub use export::{export_frames, export_frames_background, export_frames_to_file, ExportError};
pub use frame::{validate_frames, Frame, Prop, PropKind};
pub use player::{AnimationPlayer, PlayerError, DEFAULT_TICK_INTERVAL};
pub use store::{
    FileStore, FrameStore, KeyValueStore, MemoryStore, StoreError, EXPORT_MARKS_KEY, OVERLAY_KEY,
    WORKING_POSE_KEY,
};
