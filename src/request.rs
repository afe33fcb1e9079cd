//! Run configuration
//!
//! A `GenerationRequest` is built once from CLI input and passed by
//! reference into every component; nothing reads process-level state.

use std::path::PathBuf;

use crate::manifest::Platform;

/// Immutable description of a single generation run
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Source image file
    pub source: PathBuf,
    /// Output root directory; platform subtrees are created beneath it
    pub output_root: PathBuf,
    /// Platforms to generate icons for
    pub platforms: Vec<Platform>,
    /// Permit clearing a pre-existing per-platform output directory
    pub force: bool,
    /// Apply a rounded-corner mask to the source before fan-out
    pub round_corners: bool,
    /// Base file name substituted into Android path templates
    pub android_icon: String,
}
