//! Integration tests for the duanju CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

#[test]
fn test_segment_chinese_text() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("chinese-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("你好。"))
        .stdout(predicate::str::contains("这是“一个？测试”。"));
}

#[test]
fn test_segment_english_text() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello world."))
        .stdout(predicate::str::contains("This is a test."));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("chinese-sample.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("]"))
        .stdout(predicate::str::contains("\"text\""))
        .stdout(predicate::str::contains("\"chars\""));
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("chinese-sample.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences:"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Hello world."));
    assert!(content.contains("This is a test."));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("*-sample.txt"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hello world."))
        .stdout(predicate::str::contains("你好。"));
}

#[test]
fn test_unmatched_quote_fails_by_default() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("unmatched-quote.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn test_error_tolerant_flag() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("unmatched-quote.txt"))
        .arg("--error-tolerant");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("这里有一个”错误。"));
}

#[test]
fn test_config_file_enables_tolerance() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("duanju.toml");
    fs::write(&config_file, "[segmentation]\nerror_tolerant = true\n").unwrap();

    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("unmatched-quote.txt"))
        .arg("-c")
        .arg(&config_file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("这里有一个”错误。"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("segment").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("duanju").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}
