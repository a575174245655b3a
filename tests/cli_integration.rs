//! 通过实际运行二进制文件来验证命令行行为：输出、退出状态与生成的文件。

use assert_cmd::Command;
use image::{ImageBuffer, Rgb};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pixel_whisper() -> Command {
    Command::cargo_bin("pixel_whisper").unwrap()
}

fn write_cover(dir: &TempDir, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.path().join(name);
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 5) as u8, (y * 3) as u8, (x ^ y) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    pixel_whisper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hide"))
        .stdout(predicate::str::contains("recover"))
        .stdout(predicate::str::contains("capacity"));
}

#[test]
fn test_hide_then_recover_inline_message() {
    let dir = TempDir::new().unwrap();
    let cover = write_cover(&dir, "cover.png", 40, 30);
    let hidden = dir.path().join("hidden.png");
    let recovered = dir.path().join("out.txt");

    pixel_whisper()
        .args(["hide", "-m", "Some text", "-i"])
        .arg(&cover)
        .arg("-d")
        .arg(&hidden)
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully hidden"));

    pixel_whisper()
        .args(["recover", "-i"])
        .arg(&hidden)
        .arg("-t")
        .arg(&recovered)
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully recovered"));

    assert_eq!(fs::read(&recovered).unwrap(), b"Some text");
}

#[test]
fn test_capacity_reports_limits() {
    let dir = TempDir::new().unwrap();
    let cover = write_cover(&dir, "cover.png", 10, 10);

    pixel_whisper()
        .args(["capacity", "-i"])
        .arg(&cover)
        .assert()
        .success()
        .stdout(predicate::str::contains("10x10"))
        .stdout(predicate::str::contains("37"))
        .stdout(predicate::str::contains("35"));
}

#[test]
fn test_hide_without_payload_is_a_usage_error() {
    pixel_whisper()
        .args(["hide", "-i", "cover.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--text").or(predicate::str::contains("--message")));
}

#[test]
fn test_hide_empty_message_fails() {
    let dir = TempDir::new().unwrap();
    let cover = write_cover(&dir, "cover.png", 10, 10);

    pixel_whisper()
        .args(["hide", "-m", "", "-i"])
        .arg(&cover)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty payload"));

    assert!(!dir.path().join("doctored_cover.png").exists());
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("cover.bmp");
    fs::write(&cover, b"BM").unwrap();

    pixel_whisper()
        .args(["recover", "-i"])
        .arg(&cover)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported image format"));
}

#[test]
fn test_lossy_format_warns_once() {
    let dir = TempDir::new().unwrap();
    let cover = write_cover(&dir, "cover.jpg", 40, 30);

    pixel_whisper()
        .env_remove("RUST_LOG")
        .args(["hide", "-m", "Some text", "-i"])
        .arg(&cover)
        .assert()
        .success()
        .stderr(predicate::str::contains("lossy format").count(1));

    assert!(dir.path().join("doctored_cover.jpg").exists());
}
