//! Error types for treeselect
//!
//! The state machine itself never fails; errors only come from loading item
//! files and settings. Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeselect operations
pub type TreeSelectResult<T> = Result<T, TreeSelectError>;

/// Main error type for treeselect operations
#[derive(Error, Debug)]
pub enum TreeSelectError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Item file could not be parsed
    #[error("invalid items in {file}: {message}")]
    InvalidItems { file: PathBuf, message: String },

    /// Settings file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Item file extension is neither TOML nor JSON
    #[error("unsupported item file format '{extension}' for {file} (expected .toml or .json)")]
    UnsupportedFormat { file: PathBuf, extension: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The interactive picker was dismissed without confirming
    #[error("selection aborted by user")]
    Aborted,
}
