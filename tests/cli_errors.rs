mod common;

use common::{collect_files, run, write_png, write_square_png};
use tempfile::tempdir;

#[test]
fn test_missing_source_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("build");

    let result = run(&[
        "-s",
        dir.path().join("nope.png").to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("source file not found"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn test_non_square_source_fails_with_zero_outputs() {
    let dir = tempdir().unwrap();
    let source = write_png(dir.path(), "wide.png", 100, 60);
    let output = dir.path().join("build");

    let result = run(&[
        "-s",
        source.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("must be square"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(stderr.contains("100x60"));
    assert!(collect_files(&output).is_empty());
    assert!(!output.exists());
}

#[test]
fn test_undecodable_source_fails() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("junk.png");
    std::fs::write(&source, b"definitely not an image").unwrap();
    let output = dir.path().join("build");

    let result = run(&[
        "-s",
        source.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("could not decode"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn test_unknown_target_fails_before_touching_disk() {
    let dir = tempdir().unwrap();
    let source = write_square_png(dir.path(), "icon.png", 64);
    let output = dir.path().join("build");

    let result = run(&[
        "-s",
        source.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-t",
        "watchos",
    ]);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("unknown target platform 'watchos'"),
        "unexpected stderr:\n{stderr}"
    );
    assert!(!output.exists());
}

#[test]
fn test_missing_required_flags_fail() {
    let result = run(&[]);
    assert!(!result.status.success());

    let result = run(&["-s", "icon.png"]);
    assert!(!result.status.success());
}
