//! File discovery module for finding video files to process.
//!
//! This module handles the discovery of video files eligible for processing.
//! Currently only searches for .mp4 files (case-insensitive) in the top level
//! of the provided directory.

use crate::config::VIDEO_EXTENSION;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds video files eligible for processing in the specified directory.
///
/// This function scans the top level of the provided directory for .mp4 files
/// (case-insensitive) and returns their paths. It does not search subdirectories.
///
/// # Arguments
///
/// * `input_dir` - The directory to search for video files
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - A vector of paths to the discovered .mp4 files
/// * `Err(CoreError::Io)` - If an error occurs during directory traversal
/// * `Err(CoreError::NoFilesFound)` - If no .mp4 files are found
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case(VIDEO_EXTENSION))
                .map(|_| path.clone())
        })
        .collect();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
