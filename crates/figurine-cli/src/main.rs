//! Figurine CLI - Command-line tools for stick-figure animation data
//!
//! This binary provides commands for validating, listing, exporting,
//! importing, and playing back figurine animation frames.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use figurine_cli::commands;

/// Figurine - Stick-Figure Animation Toolkit
#[derive(Parser)]
#[command(name = "figurine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the read-only authoritative frames file
    #[arg(short, long, global = true)]
    frames: Option<PathBuf>,

    /// Directory holding the mutable overlay store
    #[arg(short, long, global = true, default_value = ".figurine")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every frame in the merged store
    Validate,

    /// List stored animations and their frames
    List {
        /// Restrict the listing to one animation
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Resolve one frame by name and number and print its joint layout
    Lookup {
        /// Animation name
        #[arg(short, long)]
        name: String,

        /// Frame number within the animation
        #[arg(short = 'N', long)]
        number: i32,
    },

    /// Export frames as canonical sorted-key JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export only frames marked for export
        #[arg(long)]
        marked: bool,
    },

    /// Import a legacy point-format pose file as a new frame
    Import {
        /// Path to the legacy pose file
        input: PathBuf,

        /// Animation name for the imported frame
        #[arg(short, long)]
        name: String,

        /// Frame number for the imported frame
        #[arg(short = 'N', long, default_value_t = 1)]
        number: i32,
    },

    /// Play a frame sequence against the wall clock
    Play {
        /// Animation name
        #[arg(short, long)]
        name: String,

        /// Comma-separated frame numbers, e.g. "1,2,3,2"
        #[arg(short, long)]
        sequence: String,

        /// Loop the sequence instead of stopping after one pass
        #[arg(long)]
        r#loop: bool,

        /// Milliseconds between ticks
        #[arg(long, default_value_t = 200)]
        interval_ms: u64,

        /// Upper bound on ticks, for looped playback
        #[arg(long, default_value_t = 64)]
        max_ticks: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let frames = cli.frames.as_deref();
    let data_dir = cli.data_dir.as_path();

    let outcome = match cli.command {
        Commands::Validate => commands::validate::run(frames, data_dir),
        Commands::List { name } => commands::list::run(frames, data_dir, name.as_deref()),
        Commands::Lookup { name, number } => {
            commands::lookup::run(frames, data_dir, &name, number)
        }
        Commands::Export { output, marked } => {
            commands::export::run(frames, data_dir, output.as_deref(), marked)
        }
        Commands::Import {
            input,
            name,
            number,
        } => commands::import::run(frames, data_dir, &input, &name, number),
        Commands::Play {
            name,
            sequence,
            r#loop,
            interval_ms,
            max_ticks,
        } => commands::play::run(
            frames,
            data_dir,
            &name,
            &sequence,
            r#loop,
            interval_ms,
            max_ticks,
        ),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
