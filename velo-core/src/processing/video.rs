// ============================================================================
// velo-core/src/processing/video.rs
// ============================================================================
//
// BATCH TRANSFORM RUNNER: Main Processing Orchestration
//
// This module houses the batch runner for the velo-core library. It
// enumerates eligible files, applies the skip guard, invokes the external
// transform per remaining file, and reports per-file and overall outcomes.
//
// WORKFLOW:
// 1. Terminate early when the input directory does not exist
// 2. Discover candidate .mp4 files; terminate early when none match
// 3. For each candidate, in enumeration order:
//    a. Compute the output filename ({stem}_{speed}x.{ext})
//    b. Skip when the output already exists (idempotence guard)
//    c. Otherwise open -> multiply speed -> write, releasing both clip
//       handles on every path
//    d. Catch any per-file error, log it, and continue with the next file
// 4. Report completion

use crate::config::CoreConfig;
use crate::discovery::find_processable_files;
use crate::error::{CoreError, CoreResult};
use crate::external::{EncodeSettings, VideoClip, VideoSource};
use crate::utils::output_path_for;
use crate::{RunOutcome, TransformOutcome, TransformReport};

use colored::*;
use log::{error, info};

use std::path::{Path, PathBuf};

/// Runs a whole batch over the configured directory.
///
/// This is the single entry point for a job request: it performs the
/// directory-existence check and discovery, then hands the candidate list to
/// [`process_videos`]. Run-level conditions (missing directory, nothing to
/// do) are reported on the log stream and returned as early-terminated
/// [`RunOutcome`] states; the function returns normally in every case.
pub fn process_directory<S: VideoSource>(source: &S, config: &CoreConfig) -> RunOutcome {
    if !config.input_dir.is_dir() {
        error!(
            "Error: The directory '{}' does not exist.",
            config.input_dir.display()
        );
        return RunOutcome::DirectoryMissing;
    }

    let files = match find_processable_files(&config.input_dir) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            info!("No .mp4 files found in the directory.");
            return RunOutcome::NoFilesFound;
        }
        Err(e) => {
            error!(
                "Failed to scan directory '{}': {}",
                config.input_dir.display(),
                e
            );
            return RunOutcome::NoFilesFound;
        }
    };

    RunOutcome::Completed(process_videos(source, config, &files))
}

/// Processes a list of candidate files sequentially.
///
/// One file is fully transformed (or skipped or failed) before the next
/// begins; a failure never aborts the batch. Returns one report per
/// candidate, in enumeration order.
pub fn process_videos<S: VideoSource>(
    source: &S,
    config: &CoreConfig,
    files_to_process: &[PathBuf],
) -> Vec<TransformReport> {
    info!("Found {} videos to process...", files_to_process.len());

    let settings = EncodeSettings::default();
    let mut reports: Vec<TransformReport> = Vec::with_capacity(files_to_process.len());

    for input_path in files_to_process {
        let filename = display_name(input_path);

        let output_path = match output_path_for(input_path, config.speed_factor) {
            Ok(path) => path,
            Err(e) => {
                error!("Failed to process {}: {}", filename, e);
                reports.push(TransformReport {
                    filename,
                    outcome: TransformOutcome::Failed {
                        error: e.to_string(),
                    },
                });
                continue;
            }
        };

        // Skip guard: never re-transform a file whose output already exists.
        if output_path.exists() {
            info!(
                "{} {}: Output file already exists.",
                "Skipping".yellow(),
                filename
            );
            reports.push(TransformReport {
                filename,
                outcome: TransformOutcome::Skipped,
            });
            continue;
        }

        info!("{} {}...", "Processing:".cyan().bold(), filename);

        match transform_file(source, input_path, &output_path, config.speed_factor, &settings) {
            Ok(()) => {
                let output_filename = display_name(&output_path);
                info!("{} {}", "Saved:".green(), output_filename);
                reports.push(TransformReport {
                    filename,
                    outcome: TransformOutcome::Succeeded { output_filename },
                });
            }
            Err(e) => {
                error!("Failed to process {}: {}", filename, e);
                reports.push(TransformReport {
                    filename,
                    outcome: TransformOutcome::Failed {
                        error: e.to_string(),
                    },
                });
            }
        }
    }

    info!("Processing complete.");
    reports
}

/// Transforms a single file: open, multiply speed, encode.
///
/// Both the decoded and the derived clip are closed exactly once before
/// returning, on success and on failure, so resource usage stays bounded to
/// one file's worth.
fn transform_file<S: VideoSource>(
    source: &S,
    input_path: &Path,
    output_path: &Path,
    speed_factor: u32,
    settings: &EncodeSettings,
) -> CoreResult<()> {
    let clip = source.open(input_path)?;

    let fast_clip = match clip.multiply_speed(speed_factor) {
        Ok(derived) => derived,
        Err(e) => {
            clip.close();
            return Err(e);
        }
    };

    let write_result = fast_clip.write(output_path, settings);

    clip.close();
    fast_clip.close();

    write_result
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}
