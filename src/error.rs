//! Error types for appicon
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appicon operations
pub type IconResult<T> = Result<T, IconError>;

/// Main error type for appicon operations
#[derive(Error, Debug)]
pub enum IconError {
    /// Source image file does not exist or is not a regular file
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source image could not be decoded
    #[error("could not decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Source image is not square
    #[error("source image must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    /// Unknown target platform name
    #[error("unknown target platform '{name}' (expected 'ios' or 'android')")]
    InvalidTarget { name: String },

    /// Per-platform output directory already exists
    #[error("output directory already exists: {path} (pass --force to replace it)")]
    OutputExists { path: PathBuf },

    /// Could not create an output directory
    #[error("could not create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
