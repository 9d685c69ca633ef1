//! Figurine End-to-End Test Infrastructure
//!
//! This crate hosts integration tests for the flows that cross crate
//! boundaries:
//!
//! - Store: two-tier merge, overlay persistence, export marks
//! - Playback: player scenarios against a populated store
//! - Export: canonical output stability across store round trips
//! - Legacy import: point-format files through to playable frames
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p figurine-tests
//! ```

pub mod fixtures;
