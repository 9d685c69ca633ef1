//! Export command implementation
//!
//! Writes the canonical sorted-key JSON document for the whole store
//! or for the frames marked for export.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use figurine_anim::export_frames;

use crate::input::open_store;

/// Run the export command.
pub fn run(
    frames_path: Option<&Path>,
    data_dir: &Path,
    output: Option<&Path>,
    marked_only: bool,
) -> Result<ExitCode> {
    let store = open_store(frames_path, data_dir)?;

    let frames: Vec<_> = if marked_only {
        store.marked_frames().into_iter().cloned().collect()
    } else {
        store.frames().into_iter().cloned().collect()
    };

    if frames.is_empty() {
        eprintln!("{}", "nothing to export".yellow());
        return Ok(ExitCode::FAILURE);
    }

    let json = export_frames(&frames)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} {} frame(s) -> {}",
                "Exported:".green().bold(),
                frames.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(ExitCode::SUCCESS)
}
