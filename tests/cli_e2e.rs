//! End-to-end tests for the asciicam binary.
//!
//! Every run gets an isolated config directory so a user's own config file
//! cannot change the output.

use assert_cmd::Command;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn asciicam(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("asciicam").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

fn write_image(dir: &Path, name: &str, img: &DynamicImage, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    img.save_with_format(&path, format).unwrap();
    path
}

fn white(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])))
}

// ============================================================================
// Still image rendering
// ============================================================================

#[test]
fn white_png_renders_at_signs() {
    let home = TempDir::new().unwrap();
    let path = write_image(home.path(), "white.png", &white(2, 2), ImageFormat::Png);

    asciicam(&home)
        .arg(&path)
        .args(["--size", "2x2", "--charset", "standard"])
        .assert()
        .success()
        .stdout("width: 2 height: 2\n@@\n@@\n");
}

#[test]
fn file_flag_matches_positional() {
    let home = TempDir::new().unwrap();
    let path = write_image(home.path(), "white.png", &white(2, 2), ImageFormat::Png);

    asciicam(&home)
        .arg("--file")
        .arg(&path)
        .args(["--size", "2x1", "--ramp", "ab"])
        .assert()
        .success()
        .stdout("width: 2 height: 1\nbb\n");
}

#[test]
fn format_is_detected_by_content_not_extension() {
    let home = TempDir::new().unwrap();
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([0, 0, 0])));
    let path = write_image(home.path(), "actually_png.jpg", &img, ImageFormat::Png);

    asciicam(&home)
        .arg(&path)
        .args(["--size", "3x1", "--charset", "standard"])
        .assert()
        .success()
        .stdout("width: 3 height: 1\n   \n");
}

#[test]
fn jpeg_input_renders() {
    let home = TempDir::new().unwrap();
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([255, 255, 255])));
    let path = write_image(home.path(), "white.jpg", &img, ImageFormat::Jpeg);

    asciicam(&home)
        .arg(&path)
        .args(["--size", "4x2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("width: 4 height: 2\n"));
}

#[test]
fn config_file_ramp_is_used() {
    let home = TempDir::new().unwrap();
    let path = write_image(home.path(), "white.png", &white(2, 2), ImageFormat::Png);
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[ascii]\nramp = \"xy\"\n").unwrap();

    asciicam(&home)
        .arg(&path)
        .arg("--config")
        .arg(&config)
        .args(["--size", "1x1"])
        .assert()
        .success()
        .stdout("width: 1 height: 1\ny\n");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_file_exits_1_without_output() {
    let home = TempDir::new().unwrap();

    asciicam(&home)
        .arg(home.path().join("nope.png"))
        .args(["--size", "2x2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("File could not be opened"));
}

#[test]
fn unsupported_format_exits_1() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("anim.png");
    std::fs::write(&path, b"GIF89a\x01\x00\x01\x00\x00\x00\x00;").unwrap();

    asciicam(&home)
        .arg(&path)
        .args(["--size", "2x2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Image could not be decoded"));
}

#[test]
fn corrupt_png_exits_1() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really").unwrap();

    asciicam(&home)
        .arg(&path)
        .args(["--size", "2x2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn no_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();

    asciicam(&home)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn no_arguments_with_broken_default_config_is_usage_error() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("config").join("asciicam");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[ascii\n").unwrap();

    asciicam(&home)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Failed to parse").not());
}

#[test]
fn conflicting_inputs_are_rejected() {
    let home = TempDir::new().unwrap();

    asciicam(&home)
        .args(["a.png", "--webcam"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn empty_ramp_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = write_image(home.path(), "white.png", &white(2, 2), ImageFormat::Png);

    asciicam(&home)
        .arg(&path)
        .args(["--size", "2x2", "--ramp", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid density ramp"));
}

#[test]
fn explicit_missing_config_is_error() {
    let home = TempDir::new().unwrap();
    let path = write_image(home.path(), "white.png", &white(2, 2), ImageFormat::Png);

    asciicam(&home)
        .arg(&path)
        .args(["--size", "2x2", "--config"])
        .arg(home.path().join("missing.toml"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn help_exits_0() {
    let home = TempDir::new().unwrap();

    asciicam(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--webcam"));
}

// ============================================================================
// Config subcommands
// ============================================================================

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("nested").join("asciicam.toml");

    asciicam(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
    assert!(config.exists());

    asciicam(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolution: 600x400"))
        .stdout(predicate::str::contains("(exists)"));

    asciicam(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
