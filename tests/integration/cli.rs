//! Integration tests for the `timewarp` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn timewarp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timewarp"))
        .args(args)
        .env("TIMEWARP_LANG", "en")
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_test_command_success() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "hello.bas", "10 PRINT \"HI\"\n");

    let output = timewarp(&["test", path_arg(&file), "basic"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("Testing basic code from {}", file.display())));
    assert!(stdout.contains("[basic] 10 PRINT \"HI\""));
    assert!(stdout.trim_end().ends_with("Test completed successfully"));
}

#[test]
fn test_test_command_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.bas");

    let output = timewarp(&["test", path_arg(&missing), "basic"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Test failed:"));
    assert!(!stdout.contains("Testing"));
}

#[test]
fn test_test_command_rejects_unknown_language() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "x.txt", "PRINT 1\n");

    let output = timewarp(&["test", path_arg(&file), "cobol"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_command_reports_diagnostics() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "facts.plg", "likes(mary, wine).\nlikes(john, mary)\n");

    let output = timewarp(&["check", path_arg(&file)]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("as prolog"));
    assert!(stdout.contains("Line 2: Missing period at end of clause"));
}

#[test]
fn test_check_command_with_explicit_language() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "prog.txt", "T:Hello\nQ:Oops\n");

    let output = timewarp(&["check", path_arg(&file), "--lang", "pilot"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Line 2: Unknown command: Q:"));
}

#[test]
fn test_check_command_clean_file() {
    let dir = TempDir::new().unwrap();
    let file = create_test_file(&dir, "clean.tw", "10 PRINT \"OK\"\n");

    let output = timewarp(&["check", path_arg(&file)]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No syntax issues found."));
}

#[test]
fn test_classify_command() {
    let output = timewarp(&["classify", "FORWARD 100"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "time_warp");
}
