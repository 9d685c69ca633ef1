//! Library surface of the figurine CLI.
//!
//! Commands live here so integration tests can drive them without
//! spawning the binary.

pub mod commands;
pub mod input;
