//! List command implementation
//!
//! Prints the merged frame catalogue, optionally filtered to one
//! animation.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::input::open_store;

/// Run the list command.
pub fn run(frames_path: Option<&Path>, data_dir: &Path, name: Option<&str>) -> Result<ExitCode> {
    let store = open_store(frames_path, data_dir)?;

    let names = match name {
        Some(one) => vec![one.to_owned()],
        None => store.animation_names(),
    };

    if names.is_empty() {
        println!("{}", "no frames stored".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    for animation in names {
        let frames = store.frames_for(&animation);
        println!(
            "{} {} ({} frame(s))",
            "Animation:".cyan().bold(),
            animation,
            frames.len()
        );
        for frame in frames {
            let marked = if store.is_marked(frame.id) { " *" } else { "" };
            println!(
                "  #{:<4} {}  {}{}",
                frame.number,
                frame.id,
                frame.created_at.format("%Y-%m-%d %H:%M:%S"),
                marked
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
