//! Directory lifecycle and resize fan-out
//!
//! Pre-flight runs synchronously: the source is validated first, then the
//! conflict check covers every selected platform before any directory is
//! removed or created, so a bad source or a conflict on one platform aborts
//! the whole run with no partial output and nothing destroyed. The fan-out then spawns one blocking task per
//! manifest entry against the shared source buffer and awaits them all;
//! one entry's failure never aborts its siblings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use image::imageops::{self, FilterType};
use image::ImageFormat;

use crate::error::{IconError, IconResult};
use crate::manifest;
use crate::paths;
use crate::request::GenerationRequest;
use crate::source::PreparedSource;

/// Outcome of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Files written, in completion order
    pub written: Vec<PathBuf>,
    /// Per-entry failures as (destination, message)
    pub errors: Vec<(PathBuf, String)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run a full generation pass for the request.
///
/// Returns `Err` for fatal pre-flight failures (bad source, directory
/// conflicts); per-entry resize/write failures are collected in the report.
pub async fn generate(request: &GenerationRequest) -> IconResult<GenerationReport> {
    let entries = manifest::entries_for(&request.platforms);

    // Validate the source before the directory lifecycle runs, so a bad
    // source never clears or creates any output directory.
    let source = Arc::new(PreparedSource::load(&request.source, request.round_corners)?);

    prepare_platform_dirs(request)?;

    // Resolve every destination before scheduling any task, so directories
    // are guaranteed to exist when the writes land.
    let mut jobs: Vec<(PathBuf, u32)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let platform_dir = request.output_root.join(entry.platform.dir_name());
        let dest = paths::resolve(&platform_dir, entry.relative_path, &request.android_icon)?;
        jobs.push((dest, entry.size));
    }

    Ok(fan_out(source, jobs).await)
}

/// Spawn one resize+write task per job and collect every outcome.
///
/// One job's failure never aborts the others; the report is complete only
/// once all tasks have settled.
async fn fan_out(source: Arc<PreparedSource>, jobs: Vec<(PathBuf, u32)>) -> GenerationReport {
    let mut dests = Vec::with_capacity(jobs.len());
    let mut handles = Vec::with_capacity(jobs.len());
    for (dest, size) in jobs {
        dests.push(dest.clone());
        let source = Arc::clone(&source);
        handles.push(tokio::task::spawn_blocking(move || {
            println!("generating image '{}' with size {size}x{size}", dest.display());
            write_variant(&source, size, &dest).map_err(|err| err.to_string())
        }));
    }

    let mut report = GenerationReport::default();
    for (dest, result) in dests.into_iter().zip(join_all(handles).await) {
        match result {
            Ok(Ok(())) => report.written.push(dest),
            Ok(Err(message)) => report.errors.push((dest, message)),
            Err(join_error) => report.errors.push((dest, join_error.to_string())),
        }
    }
    report
}

/// Resize the prepared source to `size` and encode it as PNG at `dest`
fn write_variant(
    source: &PreparedSource,
    size: u32,
    dest: &Path,
) -> Result<(), image::ImageError> {
    let resized = imageops::resize(source.image(), size, size, FilterType::Lanczos3);
    resized.save_with_format(dest, ImageFormat::Png)
}

/// Check and (re)create each selected platform's output directory.
///
/// All conflict checks run before any directory is removed or created.
fn prepare_platform_dirs(request: &GenerationRequest) -> IconResult<()> {
    let dirs: Vec<PathBuf> = request
        .platforms
        .iter()
        .map(|platform| request.output_root.join(platform.dir_name()))
        .collect();

    if !request.force {
        for dir in &dirs {
            if dir.is_dir() {
                return Err(IconError::OutputExists { path: dir.clone() });
            }
        }
    }

    for dir in &dirs {
        if request.force && dir.is_dir() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir).map_err(|source| IconError::DirectoryCreate {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}
