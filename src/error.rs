//! Error types for colour-maze
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while parsing or walking a maze
#[derive(Debug, Error)]
pub enum MazeError {
    /// Grid text was empty or malformed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A constructor was handed an unusable argument (e.g. an empty sequence)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for colour-maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
