//! End-to-end tests for `tileprint render`.

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_render_default_inventory_writes_eighteen_pages() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(&["render", "--out", out.to_str().unwrap()], temp.path());
    assert_success(&output, "Render");

    let files = svg_files(&out);
    assert_eq!(files.len(), 18);
    assert!(files[0].ends_with("page-01.svg"));
    assert!(files[17].ends_with("page-18.svg"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1200 tiles on 18 page(s) at 25 mm"));
}

#[test]
fn test_render_single_tile_page() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(
        &[
            "render",
            "--zero",
            "--spares",
            "0",
            "--letter",
            "A=1",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Render");

    let files = svg_files(&out);
    assert_eq!(files.len(), 1);

    let svg = fs::read_to_string(&files[0]).unwrap();
    assert!(svg.contains(r#"width="270mm" height="195mm" viewBox="0 0 270 195""#));
    assert_eq!(svg.matches("<rect").count(), 70);
    assert_eq!(svg.matches(r#"class="letter""#).count(), 1);
    assert!(svg.contains(">A</text>"));
    assert!(svg.contains(r#"class="score" x="20" y="20" font-size="5">1</text>"#));
}

#[test]
fn test_render_no_blank_fill() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(
        &[
            "render",
            "--zero",
            "--spares=0",
            "--letter",
            "Z=3",
            "--no-blank-fill",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Render");

    let svg = fs::read_to_string(out.join("page-01.svg")).unwrap();
    assert_eq!(svg.matches("<rect").count(), 3);
}

#[test]
fn test_render_negative_spares_are_clamped() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(
        &[
            "render",
            "--zero",
            "--spares",
            "-5",
            "--letter",
            "E=71",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Render");
    assert_eq!(svg_files(&out).len(), 2);
}

#[test]
fn test_render_tile_size_scales_page() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(
        &[
            "render",
            "--zero",
            "--letter",
            "M=1",
            "--tile-size",
            "20",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Render");

    let files = svg_files(&out);
    let svg = fs::read_to_string(&files[0]).unwrap();
    // 10 * 20 + 2 * 10 by 7 * 20 + 2 * 10
    assert!(svg.contains(r#"width="220mm" height="160mm""#));
}

#[test]
fn test_render_nothing_to_print() {
    let temp = temp_workspace();
    let out = temp.path().join("out");

    let output = run_isolated(
        &["render", "--zero", "--spares", "0", "--out", out.to_str().unwrap()],
        temp.path(),
    );
    assert_success(&output, "Render");
    assert!(!out.exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tiles to render"));
}

#[test]
fn test_render_html_print_document() {
    let temp = temp_workspace();
    let out = temp.path().join("print.html");

    let output = run_isolated(
        &[
            "render",
            "--format",
            "html",
            "--out",
            out.to_str().unwrap(),
        ],
        temp.path(),
    );
    assert_success(&output, "Render html");

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<svg").count(), 18);
    assert!(html.contains("size: 270mm 195mm"));
}

#[test]
fn test_render_uses_config_file() {
    let temp = temp_workspace();
    write_config(
        temp.path(),
        r#"
[tiles]
spares = 0
tile_size_mm = 30

[grid]
rows = 2
columns = 3
padding_mm = 5

[letters]
B = 7
"#,
    );
    let out = temp.path().join("out");

    let output = run_isolated(&["render", "--out", out.to_str().unwrap()], temp.path());
    assert_success(&output, "Render");

    let files = svg_files(&out);
    assert_eq!(files.len(), 2);
    let svg = fs::read_to_string(&files[0]).unwrap();
    assert!(svg.contains(r#"width="100mm" height="70mm""#));
}

#[test]
fn test_render_invalid_format_fails_validation() {
    let temp = temp_workspace();
    let output = run_isolated(&["render", "--format", "pdf"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid output format"));
}

#[test]
fn test_render_invalid_letter_fails_validation() {
    let temp = temp_workspace();
    let output = run_isolated(&["render", "--letter", "AB=3"], temp.path());
    assert_eq!(output.status.code(), Some(1));
}
