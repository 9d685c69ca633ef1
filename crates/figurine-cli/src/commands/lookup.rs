//! Lookup command implementation
//!
//! Resolves one `(name, number)` reference and prints the frame's
//! evaluated joint positions.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use figurine_pose::SegmentLengths;

use crate::input::open_store;

/// Run the lookup command.
///
/// Exit code: 0 if the frame exists, 1 otherwise.
pub fn run(
    frames_path: Option<&Path>,
    data_dir: &Path,
    name: &str,
    number: i32,
) -> Result<ExitCode> {
    let store = open_store(frames_path, data_dir)?;

    let Some(frame) = store.lookup(name, number) else {
        println!("{} {} #{}", "not found:".red().bold(), name, number);
        return Ok(ExitCode::FAILURE);
    };

    println!("{} {}", "Frame:".cyan().bold(), frame.reference());
    println!("  id:      {}", frame.id);
    println!("  created: {}", frame.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  scale:   {}", frame.pose.scale);
    if !frame.props.is_empty() {
        println!("  props:   {}", frame.props.len());
    }

    let layout = frame.pose.evaluate(&SegmentLengths::default());
    println!("{}", "Joints:".cyan().bold());
    for (joint, position) in layout.positions() {
        println!("  {:<14} ({:8.2}, {:8.2})", joint.label(), position.x, position.y);
    }
    Ok(ExitCode::SUCCESS)
}
