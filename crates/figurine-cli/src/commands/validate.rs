//! Validate command implementation
//!
//! Checks every frame in the merged store and reports errors and
//! warnings with their codes and field paths.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use figurine_anim::validate_frames;
use figurine_pose::{ValidationWarning, WarningCode};

use crate::input::open_store;

/// Run the validate command.
///
/// Exit code: 0 if valid, 1 if any frame fails.
pub fn run(frames_path: Option<&Path>, data_dir: &Path) -> Result<ExitCode> {
    let store = open_store(frames_path, data_dir)?;
    let frames: Vec<_> = store.frames().into_iter().cloned().collect();

    println!(
        "{} {} frame(s)",
        "Validating:".cyan().bold(),
        frames.len()
    );

    let mut result = validate_frames(&frames);
    for warning in store.duplicate_references() {
        result.add_warning(warning);
    }
    if frames.is_empty() {
        result.add_warning(ValidationWarning::new(
            WarningCode::EmptyAnimation,
            "store contains no frames",
        ));
    }

    for warning in &result.warnings {
        println!("  {} {}", "warning:".yellow().bold(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "error:".red().bold(), error);
    }

    if result.is_ok() {
        println!("{}", "OK".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
