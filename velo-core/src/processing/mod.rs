//! Batch processing orchestration.

pub mod video;

pub use video::{process_directory, process_videos};
