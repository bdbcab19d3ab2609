//! Core library for batch video speed-up processing using ffmpeg.
//!
//! This crate provides video file discovery, deterministic output naming,
//! and a sequential batch runner that re-encodes each discovered file at a
//! higher playback speed via an external transform implementation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use velo_core::{CoreConfig, SidecarVideoSource, process_directory};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/videos")).with_speed_factor(5);
//! let source = SidecarVideoSource;
//!
//! let outcome = process_directory(&source, &config);
//! println!("{} files handled", outcome.reports().len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, DEFAULT_SPEED_FACTOR};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{EncodeSettings, SidecarVideoSource, VideoClip, VideoSource, check_dependency};
pub use processing::{process_directory, process_videos};
pub use utils::output_path_for;

/// Result of handling a single candidate file.
///
/// Produced by the `process_videos` runner for every candidate, whether it
/// was skipped, transformed, or failed.
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub filename: String,
    pub outcome: TransformOutcome,
}

/// Per-file outcome of the batch runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The computed output file already existed; the transform was not attempted.
    Skipped,
    /// The transform completed and the output file was written.
    Succeeded { output_filename: String },
    /// The transform failed; the batch continued with the next candidate.
    Failed { error: String },
}

/// Terminal state of a whole run.
///
/// Run-level conditions (missing directory, nothing to do) are normal
/// empty-result paths, not errors.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The input directory does not exist; no per-file work was attempted.
    DirectoryMissing,
    /// The directory contains no matching video files.
    NoFilesFound,
    /// Every candidate was skipped, transformed, or failed individually.
    Completed(Vec<TransformReport>),
}

impl RunOutcome {
    /// Per-file reports, empty for the early-terminated run states.
    pub fn reports(&self) -> &[TransformReport] {
        match self {
            RunOutcome::Completed(reports) => reports,
            _ => &[],
        }
    }
}
