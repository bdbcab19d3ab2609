// velo-cli/src/main.rs
//
// Command-line interface for the velo batch video speed-up tool.
//
// Responsibilities:
// - Defining the CLI argument structure with clap.
// - Setting up console logging via env_logger.
// - Warning up front when ffmpeg is not on PATH.
// - Invoking the core batch runner (velo_core::process_directory).
//
// Every completed run exits 0, including runs in which individual files
// failed; results are communicated via log output and filesystem side
// effects. Only argument errors exit non-zero.

use clap::Parser;
use log::warn;
use std::path::PathBuf;
use velo_core::{CoreConfig, DEFAULT_SPEED_FACTOR, SidecarVideoSource, check_dependency};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Speed up all .mp4 files in a directory.",
    long_about = "Re-encodes every .mp4 file in a directory at a higher playback speed, \
                  writing each result as {name}_{speed}x.mp4 alongside the original. \
                  Files whose output already exists are skipped."
)]
struct Cli {
    /// Path to folder containing .mp4 files
    #[arg(short = 'd', long = "directory", required = true, value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Speed multiplier (default: 5)
    #[arg(
        short = 's',
        long = "speed",
        value_name = "FACTOR",
        default_value_t = DEFAULT_SPEED_FACTOR,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    speed: u32,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // A missing ffmpeg shows up as per-file failures; warn once up front so
    // the cause is obvious.
    if let Err(e) = check_dependency("ffmpeg") {
        warn!("{e}; every file will fail until ffmpeg is installed.");
    }

    let config = CoreConfig::new(cli.directory).with_speed_factor(cli.speed);
    let source = SidecarVideoSource;

    velo_core::process_directory(&source, &config);
}
