// velo-core/src/utils.rs
//
// Output path computation for transformed files.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Computes the output path for a transformed file.
///
/// The `_{speed}x` marker is inserted before the extension and the file is
/// placed next to the input (e.g. `video.mp4` -> `video_5x.mp4`). The
/// original extension, including its case, is preserved.
///
/// # Errors
///
/// Returns `CoreError::PathError` when the input has no derivable stem or
/// extension, or when either is not valid UTF-8.
pub fn output_path_for(input_path: &Path, speed_factor: u32) -> CoreResult<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CoreError::PathError(format!(
                "Failed to get file stem for {}",
                input_path.display()
            ))
        })?;
    let extension = input_path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            CoreError::PathError(format!(
                "Failed to get extension for {}",
                input_path.display()
            ))
        })?;

    Ok(input_path.with_file_name(format!("{stem}_{speed_factor}x.{extension}")))
}
