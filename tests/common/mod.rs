//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};

/// Path to the built appicon binary
pub const BIN: &str = env!("CARGO_BIN_EXE_appicon");

/// Solid fill color used for generated test sources
pub const FILL: Rgba<u8> = Rgba([10, 120, 200, 255]);

/// Write a solid-color PNG of the given dimensions and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, FILL)
        .save(&path)
        .unwrap();
    path
}

/// Write a solid-color square PNG source
pub fn write_square_png(dir: &Path, name: &str, size: u32) -> PathBuf {
    write_png(dir, name, size, size)
}

/// Run the appicon binary with the given arguments
pub fn run(args: &[&str]) -> Output {
    Command::new(BIN).args(args).output().unwrap()
}

/// All regular files under `root`, as sorted paths relative to `root`
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(root, root, &mut files);
    files.sort();
    files
}

fn collect_into(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_into(root, &path, files);
        } else {
            files.push(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
}
