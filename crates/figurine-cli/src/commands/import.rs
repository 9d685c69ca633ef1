//! Import command implementation
//!
//! Converts a legacy point-format pose file into a frame in the
//! overlay store.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use figurine_anim::Frame;
use figurine_pose::legacy::import_point_pose;

use crate::input::open_store;

/// Run the import command.
pub fn run(
    frames_path: Option<&Path>,
    data_dir: &Path,
    legacy_path: &Path,
    name: &str,
    number: i32,
) -> Result<ExitCode> {
    let json = fs::read_to_string(legacy_path)
        .with_context(|| format!("failed to read {}", legacy_path.display()))?;
    let pose = import_point_pose(&json)
        .with_context(|| format!("failed to decode legacy pose {}", legacy_path.display()))?;

    let mut store = open_store(frames_path, data_dir)?;
    let frame = Frame::new(name, number, pose);
    let reference = frame.reference();
    let id = frame.id;
    store.save_frame(frame)?;

    println!("{} {} ({})", "Imported:".green().bold(), reference, id);
    Ok(ExitCode::SUCCESS)
}
