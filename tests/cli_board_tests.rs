//! End-to-end tests for `tileprint board`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_board_svg_output() {
    let temp = temp_workspace();
    let template = write_board_template(temp.path());
    let out = temp.path().join("board_out.svg");

    let output = run_isolated(
        &[
            "board",
            "--template",
            template.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Board");

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"width="279.4mm" height="215.9mm""#));
    assert!(svg.contains(r#"<symbol id="board" viewBox="0 0 3300 2310""#));
    assert_eq!(svg.matches("<use ").count(), 70);
    assert!(!svg.contains("<?xml"));
}

#[test]
fn test_board_html_output() {
    let temp = temp_workspace();
    let template = write_board_template(temp.path());
    let out = temp.path().join("board.html");

    let output = run_isolated(
        &[
            "board",
            "--template",
            template.to_str().unwrap(),
            "--format",
            "html",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Board html");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("size: 279.4mm 215.9mm"));
}

#[test]
fn test_board_default_output_path() {
    let temp = temp_workspace();
    let template = write_board_template(temp.path());

    let output = run_isolated(
        &["board", "--template", template.to_str().unwrap()],
        temp.path(),
    );
    assert_success(&output, "Board");

    let files = svg_files(&temp.path().join("tiles"));
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("board_"));
}

#[test]
fn test_board_missing_template_is_io_error() {
    let temp = temp_workspace();
    let missing = temp.path().join("nope.svg");

    let output = run_isolated(
        &["board", "--template", missing.to_str().unwrap()],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read template"));
}

#[test]
fn test_board_non_svg_template_is_validation_error() {
    let temp = temp_workspace();
    let path = temp.path().join("board.txt");
    fs::write(&path, "not a drawing").unwrap();

    let output = run_isolated(
        &["board", "--template", path.to_str().unwrap()],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(1));
}
