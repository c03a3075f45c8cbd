//! CLI integration tests for lsketch
//!
//! These tests drive the real binary through the preset → render workflow
//! the legacy renderer hardcoded in its `main`.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the lsketch binary
fn lsketch_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("lsketch"))
}

#[test]
fn test_preset_writes_task_file() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["preset", "snowFlake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snowFlake.json"));

    let json = fs::read_to_string(dir.path().join("task/snowFlake.json")).unwrap();
    assert!(json.contains("\"genTypically\""));
    assert!(json.contains("\"axiom\": \"F++F++F\""));
}

#[test]
fn test_unknown_preset_fails() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["preset", "fern"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_render_produces_svg() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["preset", "snowFlake"])
        .assert()
        .success();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["render", "task/snowFlake.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snowFlake.svg"));

    let svg = fs::read_to_string(dir.path().join("image/snowFlake.svg")).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<line "));
    assert!(svg.contains("width=\"1500\" height=\"1500\""));
}

#[test]
fn test_render_honors_canvas_and_stroke_flags() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["preset", "triangle"])
        .assert()
        .success();

    lsketch_cmd()
        .current_dir(dir.path())
        .args([
            "render",
            "task/triangle.json",
            "--canvas",
            "2500",
            "--color",
            "navy",
            "--stroke-width",
            "1",
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("image/triangle.svg")).unwrap();
    assert!(svg.contains("width=\"2500\" height=\"2500\""));
    assert!(svg.contains("stroke=\"navy\" stroke-width=\"1\""));
}

#[test]
fn test_render_missing_task_fails() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["render", "task/nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read task file"));
}

#[test]
fn test_expand_prints_instruction_string() {
    let dir = TempDir::new().unwrap();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["preset", "snowFlake"])
        .assert()
        .success();

    lsketch_cmd()
        .current_dir(dir.path())
        .args(["expand", "task/snowFlake.json", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("F-F++F-F++F-F++F-F++F-F++F-F"));
}
