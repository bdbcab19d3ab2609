// velo-cli/tests/cli_integration.rs
//
// End-to-end tests for the velo binary. None of these require a working
// ffmpeg: they exercise argument handling, the run-level conditions, and the
// skip guard, all of which terminate before any transform is attempted.

use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn velo_cmd() -> Command {
    Command::cargo_bin("velo").expect("Failed to find velo binary")
}

#[test]
fn test_missing_directory_arg_fails() {
    let mut cmd = velo_cmd();
    cmd.assert().failure().stderr(contains("--directory"));
}

#[test]
fn test_zero_speed_rejected() {
    let mut cmd = velo_cmd();
    cmd.args(["-d", "/tmp", "-s", "0"]);
    cmd.assert().failure();
}

#[test]
fn test_nonexistent_directory_reports_and_exits_zero() {
    let mut cmd = velo_cmd();
    cmd.args(["-d", "/surely/this/does/not/exist/velo"]);
    cmd.assert().success().stderr(contains("does not exist"));
}

#[test]
fn test_empty_directory_reports_no_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = velo_cmd();
    cmd.args(["-d", dir.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stderr(contains("No .mp4 files found"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_existing_outputs_are_skipped() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    std::fs::write(dir.path().join("video.mp4"), "dummy content")?;
    std::fs::write(dir.path().join("video_5x.mp4"), "dummy output")?;
    // Keep the pre-existing output from being treated as a fresh candidate.
    std::fs::write(dir.path().join("video_5x_5x.mp4"), "dummy output")?;

    let mut cmd = velo_cmd();
    cmd.args(["-d", dir.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stderr(contains("Skipping video.mp4: Output file already exists."))
        .stderr(contains("Processing complete."));

    dir.close()?;
    Ok(())
}

#[test]
fn test_help_mentions_flags() {
    let mut cmd = velo_cmd();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("--directory"))
        .stdout(contains("--speed"));
}
