use thiserror::Error;

/// Custom error types for velo
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No processable .mp4 files found in input directory")]
    NoFilesFound,

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("External dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, String),

    #[error("{0} failed: {1}")]
    CommandFailed(String, String),

    #[error("Transform error: {0}")]
    Transform(String),
}

/// Result type for velo core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
