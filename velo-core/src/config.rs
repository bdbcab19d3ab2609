// velo-core/src/config.rs
//
// Configuration structure and fixed encoding constants for the core library.
// Instances of CoreConfig are created by consumers (like velo-cli) and passed
// to the batch runner to select the job request.

use std::path::PathBuf;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Default playback speed multiplier applied when none is requested.
pub const DEFAULT_SPEED_FACTOR: u32 = 5;

/// CRF (Constant Rate Factor) used for every encode.
/// 18 is visually lossless for x264; lower = better quality.
pub const DEFAULT_QUALITY_CRF: u32 = 18;

/// Video codec used for every encode.
pub const VIDEO_CODEC: &str = "libx264";

/// Audio codec used for every encode.
pub const AUDIO_CODEC: &str = "aac";

/// x264 speed/quality preset used for every encode.
pub const ENCODER_PRESET: &str = "slow";

/// The single recognized input extension (matched case-insensitively).
pub const VIDEO_EXTENSION: &str = "mp4";

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Job request for one run of the batch runner.
///
/// The encode configuration (codec, quality, preset) is deliberately not
/// part of this struct; those are fixed constants, not tunable inputs.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing input video files to process
    pub input_dir: PathBuf,

    /// Positive playback speed multiplier for the output files
    pub speed_factor: u32,
}

impl CoreConfig {
    /// Creates a config for the given directory with the default speed factor.
    pub fn new(input_dir: PathBuf) -> Self {
        CoreConfig {
            input_dir,
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }

    /// Overrides the speed factor.
    #[must_use]
    pub fn with_speed_factor(mut self, speed_factor: u32) -> Self {
        self.speed_factor = speed_factor;
        self
    }
}
