// ============================================================================
// velo-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TRANSFORM: Abstraction Over the Media-Processing Collaborator
//
// This module encapsulates the external decode/filter/encode collaborator
// behind a narrow trait seam (open-by-path -> multiply speed -> write with a
// fixed codec configuration -> release) so the batch runner can be tested by
// substituting an implementation that records calls without transcoding.
//
// The default implementation executes ffmpeg via the ffmpeg-sidecar crate.
// Mock implementations live in `mocks` behind the "test-mocks" feature.

use crate::config::{AUDIO_CODEC, DEFAULT_QUALITY_CRF, ENCODER_PRESET, VIDEO_CODEC};
use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// ffmpeg-sidecar backed implementation of the transform traits
pub mod ffmpeg;

/// Call-recording mock implementations (feature = "test-mocks")
pub mod mocks;

pub use ffmpeg::{SidecarClip, SidecarVideoSource};

// ============================================================================
// ENCODE SETTINGS
// ============================================================================

/// Fixed quality/codec configuration handed to every encode.
///
/// These are configuration constants, not tunable inputs; `Default` yields
/// the only configuration the tool uses (libx264/aac, CRF 18, slow preset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSettings {
    pub video_codec: String,
    pub audio_codec: String,
    pub quality: u32,
    pub preset: String,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        EncodeSettings {
            video_codec: VIDEO_CODEC.to_string(),
            audio_codec: AUDIO_CODEC.to_string(),
            quality: DEFAULT_QUALITY_CRF,
            preset: ENCODER_PRESET.to_string(),
        }
    }
}

// ============================================================================
// TRANSFORM TRAITS
// ============================================================================

/// Trait for opening a video file as a clip handle.
///
/// This is the dependency-injection seam for the batch runner: production
/// code uses [`SidecarVideoSource`], tests substitute a mock.
pub trait VideoSource {
    type Clip: VideoClip;

    /// Opens the video at `input_path` for reading.
    fn open(&self, input_path: &Path) -> CoreResult<Self::Clip>;
}

/// Trait representing an opened (or derived) video clip.
///
/// `close` consumes the clip so each handle is released exactly once; the
/// runner closes both the decoded and the derived clip on every path.
pub trait VideoClip: Sized {
    /// Derives a new clip with playback sped up by `factor`.
    fn multiply_speed(&self, factor: u32) -> CoreResult<Self>;

    /// Encodes this clip to `output_path` with the given settings.
    fn write(&self, output_path: &Path, settings: &EncodeSettings) -> CoreResult<()>;

    /// Releases all resources held by this clip.
    fn close(self);
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Attempts to run the command with a `-version` argument to verify that it
/// exists. Used by the CLI to warn up front when ffmpeg is missing; a missing
/// binary otherwise surfaces as per-file failures.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => Err(CoreError::CommandStart(cmd_name.to_string(), e.to_string())),
    }
}
