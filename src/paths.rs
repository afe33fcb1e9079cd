//! Output path resolution
//!
//! Turns a manifest path template into a concrete destination path under a
//! platform directory, creating intermediate directories as it descends.
//! Substitution is a pure function of (template, name); the manifest table
//! itself is never touched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, IconResult};
use crate::manifest::ICON_TOKEN;

/// Replace every occurrence of [`ICON_TOKEN`] with the Android icon base name
pub fn substitute(template: &str, android_icon: &str) -> String {
    template.replace(ICON_TOKEN, android_icon)
}

/// Resolve a manifest path template to a destination file path.
///
/// Every ancestor directory of the returned path exists on return. The
/// template uses `/` as separator regardless of host platform.
pub fn resolve(
    platform_dir: &Path,
    template: &str,
    android_icon: &str,
) -> IconResult<PathBuf> {
    let relative = substitute(template, android_icon);
    let segments: Vec<&str> = relative.split('/').collect();

    let mut dir = platform_dir.to_path_buf();
    for segment in &segments[..segments.len() - 1] {
        dir.push(segment);
        if !dir.is_dir() {
            fs::create_dir(&dir).map_err(|source| IconError::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;
        }
    }

    Ok(dir.join(segments[segments.len() - 1]))
}
