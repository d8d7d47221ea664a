//! Integration tests for the stamp CLI
//!
//! These tests verify end-to-end behavior of the CLI by running the binary
//! against job files and checking exit codes, output files, and messages.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path to the stamp binary built for this test run
fn stamp_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_stamp"))
}

/// Write a job file into `dir` and return its path
fn write_job(dir: &Path, name: &str, source: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, source).unwrap();
    path
}

fn run_stamp(args: &[&str]) -> std::process::Output {
    Command::new(stamp_binary())
        .args(args)
        .output()
        .expect("Failed to execute stamp")
}

#[test]
fn test_render_batch_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "badge.json5", r#"{ length: "3", width: "40", height: "40" }"#);
    let out_dir = dir.path().join("frames");

    let output = run_stamp(&[
        "render",
        job.to_str().unwrap(),
        "-o",
        &format!("{}/", out_dir.display()),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    for index in 0..3 {
        assert!(out_dir.join(format!("{:03}.png", index)).exists());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Saved:").count(), 3);
}

#[test]
fn test_render_single_index_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "badge.json5", r#"{ length: "5", width: "30", height: "20" }"#);
    let out = dir.path().join("one.png");

    let output = run_stamp(&[
        "render",
        job.to_str().unwrap(),
        "--index",
        "2",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let image = image::open(&out).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (30, 20));
}

#[test]
fn test_render_scale_doubles_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "badge.json5", r#"{ length: "1", width: "25", height: "15" }"#);
    let out = dir.path().join("scaled.png");

    let output = run_stamp(&[
        "render",
        job.to_str().unwrap(),
        "--scale",
        "2",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let image = image::open(&out).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (50, 30));
}

#[test]
fn test_render_invalid_job_fails_with_field_errors() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "bad.json5", r#"{ length: "0", shape: "heart" }"#);

    let output = run_stamp(&["render", job.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("count must be at least 1"));
    assert!(stderr.contains("shape is invalid"));
    // No stamp was written next to the job
    assert!(!dir.path().join("bad_000.png").exists());
}

#[test]
fn test_render_missing_input_is_a_usage_error() {
    let output = run_stamp(&["render", "no/such/job.json5"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot open input file"));
}

#[test]
fn test_render_unparseable_job() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "broken.json5", "{ length: ");

    let output = run_stamp(&["render", job.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid job file"));
}

#[test]
fn test_check_valid_job() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "ok.json5", "{}");

    let output = run_stamp(&["check", job.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("OK:"));
}

#[test]
fn test_check_invalid_job() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "bad.json5", r#"{ width: "abc" }"#);

    let output = run_stamp(&["check", job.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("width(px) is not a number"));
}

#[test]
fn test_check_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_job(dir.path(), "bad.json5", r#"{ text_color: "red" }"#);

    let output = run_stamp(&["check", "--json", job.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["valid"], serde_json::Value::Bool(false));
    assert_eq!(report["issues"][0]["field"], "text_color");
}
