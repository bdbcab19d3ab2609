//! FFmpeg command building and execution for the speed transform.
//!
//! This module implements the transform traits on top of ffmpeg-sidecar,
//! building a single ffmpeg invocation per file: a `setpts` video filter and
//! a chained `atempo` audio filter for the speed change, encoded with the
//! fixed libx264/aac configuration.

use crate::error::{CoreError, CoreResult};
use crate::external::{EncodeSettings, VideoClip, VideoSource};

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use log::debug;

use std::path::{Path, PathBuf};

/// Builds the `setpts` video filter for a playback speed multiplier.
pub(crate) fn video_speed_filter(factor: u32) -> String {
    format!("setpts=PTS/{factor}")
}

/// Builds the `atempo` audio filter chain for a playback speed multiplier.
///
/// A single `atempo` stage is bounded, so factors above 2 are expressed as
/// repeated `atempo=2.0` stages followed by the remainder.
pub(crate) fn audio_speed_filter(factor: u32) -> String {
    let mut stages: Vec<String> = Vec::new();
    let mut remaining = f64::from(factor);
    while remaining > 2.0 {
        stages.push("atempo=2.0".to_string());
        remaining /= 2.0;
    }
    stages.push(format!("atempo={remaining}"));
    stages.join(",")
}

/// Builds the full ffmpeg argument list for one transform.
pub(crate) fn transform_args(
    input_path: &Path,
    output_path: &Path,
    speed_factor: u32,
    settings: &EncodeSettings,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-hide_banner".to_string(),
        "-i".to_string(),
        input_path.to_string_lossy().into_owned(),
    ];

    if speed_factor > 1 {
        args.push("-filter:v".to_string());
        args.push(video_speed_filter(speed_factor));
        args.push("-filter:a".to_string());
        args.push(audio_speed_filter(speed_factor));
    }

    args.push("-c:v".to_string());
    args.push(settings.video_codec.clone());
    args.push("-c:a".to_string());
    args.push(settings.audio_codec.clone());
    args.push("-crf".to_string());
    args.push(settings.quality.to_string());
    args.push("-preset".to_string());
    args.push(settings.preset.clone());

    args.push(output_path.to_string_lossy().into_owned());
    args
}

// ============================================================================
// CONCRETE IMPLEMENTATION USING FFMPEG-SIDECAR
// ============================================================================

/// Production [`VideoSource`] executing ffmpeg via ffmpeg-sidecar.
#[derive(Debug, Clone, Default)]
pub struct SidecarVideoSource;

/// Clip handle for [`SidecarVideoSource`].
///
/// ffmpeg performs decode, filter, and encode in a single pass, so the
/// handle carries the input path and the accumulated speed factor; the
/// actual process runs in `write`.
#[derive(Debug, Clone)]
pub struct SidecarClip {
    input_path: PathBuf,
    speed_factor: u32,
}

impl VideoSource for SidecarVideoSource {
    type Clip = SidecarClip;

    fn open(&self, input_path: &Path) -> CoreResult<SidecarClip> {
        // Surface unreadable inputs at open time, matching the decode-open step.
        std::fs::metadata(input_path)?;
        Ok(SidecarClip {
            input_path: input_path.to_path_buf(),
            speed_factor: 1,
        })
    }
}

impl VideoClip for SidecarClip {
    fn multiply_speed(&self, factor: u32) -> CoreResult<Self> {
        if factor < 1 {
            return Err(CoreError::Transform(format!(
                "speed factor must be at least 1, got {factor}"
            )));
        }
        Ok(SidecarClip {
            input_path: self.input_path.clone(),
            speed_factor: self.speed_factor.saturating_mul(factor),
        })
    }

    fn write(&self, output_path: &Path, settings: &EncodeSettings) -> CoreResult<()> {
        let args = transform_args(&self.input_path, output_path, self.speed_factor, settings);
        debug!("ffmpeg arguments: {args:?}");

        let mut cmd = FfmpegCommand::new();
        cmd.args(args.iter().map(String::as_str));

        let mut child = cmd
            .spawn()
            .map_err(|e| CoreError::CommandStart("ffmpeg".to_string(), e.to_string()))?;

        // Drain events, keeping error output for failure reporting.
        let mut error_lines: Vec<String> = Vec::new();
        let events = child.iter().map_err(|e| {
            CoreError::CommandFailed(
                "ffmpeg".to_string(),
                format!("failed to read ffmpeg events: {e}"),
            )
        })?;
        for event in events {
            match event {
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                    debug!("ffmpeg: {line}");
                    error_lines.push(line);
                }
                FfmpegEvent::Error(line) => error_lines.push(line),
                _ => {}
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(CoreError::CommandFailed(
                "ffmpeg".to_string(),
                format!("exited with {status}: {}", error_lines.join("; ")),
            ))
        }
    }

    fn close(self) {
        // The ffmpeg process is scoped to `write`; nothing is held open here.
    }
}
