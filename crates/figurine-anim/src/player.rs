//! The playback state machine.
//!
//! The player owns no clock and no store. A host drives it: `play`
//! enters the playing state and resolves the first frame immediately,
//! then the host calls `tick` on its own cadence (a timer, a test loop)
//! and renders whatever comes back. Keeping time outside the machine
//! makes every playback scenario testable without sleeping.

use std::time::Duration;

use thiserror::Error;

use crate::frame::Frame;
use crate::store::{FrameStore, KeyValueStore};

/// Default delay between ticks when the host wants a suggestion.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("animation name must not be empty")]
    EmptyName,

    #[error("playback sequence must not be empty")]
    EmptySequence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerState {
    Idle,
    Playing {
        name: String,
        sequence: Vec<i32>,
        index: usize,
        looped: bool,
    },
}

/// Host-driven animation player.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    state: PlayerState,
    tick_interval: Duration,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Overrides the suggested tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayerState::Playing { .. })
    }

    /// Starts playback of `sequence` within animation `name` and
    /// resolves the first frame immediately. Calling `play` while
    /// already playing restarts from the beginning.
    ///
    /// A sequence entry with no matching frame resolves to `None` for
    /// that step; playback still advances through it.
    pub fn play<'s, S: KeyValueStore>(
        &mut self,
        store: &'s FrameStore<S>,
        name: &str,
        sequence: &[i32],
        looped: bool,
    ) -> Result<Option<&'s Frame>, PlayerError> {
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }
        if sequence.is_empty() {
            return Err(PlayerError::EmptySequence);
        }

        self.state = PlayerState::Playing {
            name: name.to_owned(),
            sequence: sequence.to_vec(),
            index: 0,
            looped,
        };
        let frame = store.lookup(name, sequence[0]);

        // A one-shot single-frame sequence is fully rendered by the
        // resolve above.
        if !looped && sequence.len() == 1 {
            self.state = PlayerState::Idle;
        }
        Ok(frame)
    }

    /// Advances one step and resolves the frame to render, or `None`
    /// when idle. Without looping, the machine returns to idle after
    /// the last step of the sequence has been resolved.
    pub fn tick<'s, S: KeyValueStore>(&mut self, store: &'s FrameStore<S>) -> Option<&'s Frame> {
        let PlayerState::Playing {
            name,
            sequence,
            index,
            looped,
        } = &mut self.state
        else {
            return None;
        };

        *index = (*index + 1) % sequence.len();
        let number = sequence[*index];
        let last_step = *index == sequence.len() - 1;
        let name = name.clone();
        let stop_after = !*looped && last_step;

        let frame = store.lookup(&name, number);
        if stop_after {
            self.state = PlayerState::Idle;
        }
        frame
    }

    /// Stops playback and resets to the start of the sequence. Safe to
    /// call when already idle.
    pub fn stop(&mut self) {
        self.state = PlayerState::Idle;
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::store::MemoryStore;
    use figurine_pose::Pose;
    use pretty_assertions::assert_eq;

    fn store_with(numbers: &[i32]) -> FrameStore<MemoryStore> {
        let mut store = FrameStore::new(MemoryStore::new());
        for &n in numbers {
            store.save_frame(Frame::new("Run", n, Pose::default())).unwrap();
        }
        store
    }

    fn rendered(frame: Option<&Frame>) -> Option<i32> {
        frame.map(|f| f.number)
    }

    #[test]
    fn one_shot_sequence_renders_every_step_then_stops() {
        let store = store_with(&[1, 2, 3]);
        let mut player = AnimationPlayer::new();

        let first = player.play(&store, "Run", &[1, 2, 3, 2], false).unwrap();
        assert_eq!(rendered(first), Some(1));
        assert!(player.is_playing());

        assert_eq!(rendered(player.tick(&store)), Some(2));
        assert_eq!(rendered(player.tick(&store)), Some(3));
        assert_eq!(rendered(player.tick(&store)), Some(2));
        assert!(!player.is_playing());
        assert_eq!(player.tick(&store), None);
    }

    #[test]
    fn looped_sequence_wraps_indefinitely() {
        let store = store_with(&[1, 2]);
        let mut player = AnimationPlayer::new();

        let first = player.play(&store, "Run", &[1, 2], true).unwrap();
        assert_eq!(rendered(first), Some(1));
        for expected in [2, 1, 2, 1, 2] {
            assert_eq!(rendered(player.tick(&store)), Some(expected));
        }
        assert!(player.is_playing());
    }

    #[test]
    fn stop_is_synchronous_and_idempotent() {
        let store = store_with(&[1, 2]);
        let mut player = AnimationPlayer::new();
        player.play(&store, "Run", &[1, 2], true).unwrap();
        player.stop();
        assert!(!player.is_playing());
        assert_eq!(player.tick(&store), None);
        player.stop();
        assert!(!player.is_playing());
    }

    #[test]
    fn play_restarts_from_the_beginning() {
        let store = store_with(&[1, 2, 3]);
        let mut player = AnimationPlayer::new();
        player.play(&store, "Run", &[1, 2, 3], true).unwrap();
        player.tick(&store);
        let restarted = player.play(&store, "Run", &[1, 2, 3], true).unwrap();
        assert_eq!(rendered(restarted), Some(1));
    }

    #[test]
    fn missing_frames_advance_without_rendering() {
        let store = store_with(&[1]);
        let mut player = AnimationPlayer::new();

        let first = player.play(&store, "Run", &[1, 7, 1], false).unwrap();
        assert_eq!(rendered(first), Some(1));
        assert_eq!(player.tick(&store), None);
        assert_eq!(rendered(player.tick(&store)), Some(1));
        assert!(!player.is_playing());
    }

    #[test]
    fn single_frame_one_shot_is_done_after_play() {
        let store = store_with(&[1]);
        let mut player = AnimationPlayer::new();
        let first = player.play(&store, "Run", &[1], false).unwrap();
        assert_eq!(rendered(first), Some(1));
        assert!(!player.is_playing());
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let store = store_with(&[1]);
        let mut player = AnimationPlayer::new();
        assert_eq!(
            player.play(&store, "", &[1], false).unwrap_err(),
            PlayerError::EmptyName
        );
        assert_eq!(
            player.play(&store, "Run", &[], false).unwrap_err(),
            PlayerError::EmptySequence
        );
        assert!(!player.is_playing());
    }

    #[test]
    fn tick_interval_is_configurable() {
        let player = AnimationPlayer::new().with_tick_interval(Duration::from_millis(220));
        assert_eq!(player.tick_interval(), Duration::from_millis(220));
        assert_eq!(AnimationPlayer::new().tick_interval(), DEFAULT_TICK_INTERVAL);
    }
}
