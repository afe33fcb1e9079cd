//! Appicon - mobile app-icon set generator
//!
//! Reads a single square source image and writes a fixed set of resized
//! icon variants (iOS and Android) into a platform-organized output tree.
//! The library surface exists to make the binary testable; the tool is a
//! one-shot batch job, not a reusable API.

pub mod error;
pub mod generate;
pub mod manifest;
pub mod paths;
pub mod request;
pub mod source;

// Re-exports for convenience
pub use error::{IconError, IconResult};
pub use generate::{generate, GenerationReport};
pub use manifest::{entries_for, ManifestEntry, Platform, ICON_TOKEN, MANIFEST};
pub use request::GenerationRequest;
pub use source::PreparedSource;
