//! Play command implementation
//!
//! Drives the playback state machine on a wall-clock cadence and
//! prints each rendered frame reference.

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use figurine_anim::AnimationPlayer;

use crate::input::{open_store, parse_sequence};

/// Run the play command.
///
/// Looped playback would never end on its own, so `max_ticks` bounds
/// the run regardless of loop mode.
pub fn run(
    frames_path: Option<&Path>,
    data_dir: &Path,
    name: &str,
    sequence: &str,
    looped: bool,
    interval_ms: u64,
    max_ticks: usize,
) -> Result<ExitCode> {
    let store = open_store(frames_path, data_dir)?;
    let sequence = parse_sequence(sequence)?;

    let mut player =
        AnimationPlayer::new().with_tick_interval(Duration::from_millis(interval_ms));

    println!(
        "{} {} {:?} ({})",
        "Playing:".cyan().bold(),
        name,
        sequence,
        if looped { "looped" } else { "one-shot" }
    );

    let mut render = |frame: Option<&figurine_anim::Frame>| match frame {
        Some(frame) => println!("  {}", frame.reference()),
        None => println!("  {}", "(missing frame)".yellow()),
    };

    render(player.play(&store, name, &sequence, looped)?);

    let mut ticks = 0;
    while player.is_playing() && ticks < max_ticks {
        thread::sleep(player.tick_interval());
        render(player.tick(&store));
        ticks += 1;
    }

    if player.is_playing() {
        player.stop();
        println!("{}", "stopped after tick budget".yellow());
    } else {
        println!("{}", "done".green().bold());
    }
    Ok(ExitCode::SUCCESS)
}
