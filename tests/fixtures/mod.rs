//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tileprint binary
pub fn tileprint_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tileprint")
}

/// Creates a temp directory used as an isolated config dir and output root.
pub fn temp_workspace() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Runs tileprint with `TILEPRINT_CONFIG_DIR` pointed at `config_dir`.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(tileprint_bin())
        .env("TILEPRINT_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .current_dir(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Writes `content` as `config.toml` inside `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) -> PathBuf {
    let path = config_dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// A minimal board template with an explicit viewBox.
pub const BOARD_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 3300 2310">
  <rect x="0" y="0" width="3300" height="2310" fill="#1d6f42"/>
  <rect x="330" y="330" width="330" height="330" fill="#c0392b"/>
</svg>
"##;

/// Writes [`BOARD_TEMPLATE`] into `dir` and returns its path.
pub fn write_board_template(dir: &Path) -> PathBuf {
    let path = dir.join("board.svg");
    fs::write(&path, BOARD_TEMPLATE).expect("Failed to write template");
    path
}

/// Lists `*.svg` files in `dir`, sorted by name.
pub fn svg_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "svg"))
        .collect();
    files.sort();
    files
}

/// Asserts a zero exit status, printing stderr otherwise.
pub fn assert_success(output: &Output, what: &str) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "{what} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
