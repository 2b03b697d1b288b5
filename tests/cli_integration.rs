//! Integration tests that drive the `webforge` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn webforge_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_webforge"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_out(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("webforge-cli-test").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) -> Output {
    Command::new(webforge_bin())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run webforge")
}

#[test]
fn render_writes_page_to_out() {
    let out = temp_out("render-out").join("landing.html");
    let result = run(&[
        "render",
        fixture("landing.yaml").to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(result.status.success(), "render should succeed");
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Landing Page</title>"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("[L005]"), "unknown component reported: {stderr}");
}

#[test]
fn render_prints_to_stdout_without_out() {
    let result = run(&["render", fixture("landing.yaml").to_str().unwrap()]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("<h1 style=\"color: red\">Hello</h1>"));
}

#[test]
fn render_refuses_malformed_document() {
    let out = temp_out("render-malformed").join("page.html");
    let result = run(&[
        "render",
        fixture("malformed.yaml").to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    assert!(!out.exists(), "nothing should be exported");
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("[E001]"));
}

#[test]
fn render_force_exports_error_page() {
    let out = temp_out("render-force").join("page.html");
    let result = run(&[
        "render",
        fixture("malformed.yaml").to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--force",
        "--quiet",
    ]);

    assert!(result.status.success());
    assert!(fs::read_to_string(&out).unwrap().contains("YAML Error"));
}

#[test]
fn render_refuses_empty_document() {
    let result = run(&["render", fixture("empty.yaml").to_str().unwrap()]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("empty"));
}

#[test]
fn render_missing_file_fails() {
    let result = run(&["render", "does/not/exist.yaml"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Failed to read"));
}

#[test]
fn validate_clean_and_dirty_files() {
    let ok = run(&["validate", fixture("landing.yaml").to_str().unwrap()]);
    assert!(ok.status.success(), "warnings alone do not fail validation");

    let bad = run(&["validate", fixture("warnings.yaml").to_str().unwrap()]);
    assert_eq!(bad.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&bad.stdout);
    assert!(stdout.contains("error: [V010]"), "{stdout}");
    assert!(stdout.contains("[L004]"));
}

#[test]
fn validate_walks_directories() {
    let dir = temp_out("validate-dir");
    fs::create_dir_all(dir.join("pages")).unwrap();
    fs::write(dir.join("pages/home.yml"), "title: Home\nbody:\n  children:\n    - type: paragraph\n      text: Hi\n").unwrap();
    fs::write(dir.join("pages/broken.yaml"), "title: [").unwrap();
    fs::write(dir.join("readme.txt"), "title: [").unwrap();

    let result = run(&["validate", dir.to_str().unwrap()]);
    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("home.yml: OK"));
    assert!(stdout.contains("broken.yaml"));
    assert!(!stdout.contains("readme.txt"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn example_round_trips_through_render() {
    let dir = temp_out("example");
    let source = dir.join("example.yaml");
    let page = dir.join("example.html");

    let emitted = run(&["example", "--out", source.to_str().unwrap(), "--quiet"]);
    assert!(emitted.status.success());

    let rendered = run(&[
        "render",
        source.to_str().unwrap(),
        "--out",
        page.to_str().unwrap(),
        "--quiet",
    ]);
    assert!(rendered.status.success());
    assert!(fs::read_to_string(&page).unwrap().contains("<title>Earth & Soul</title>"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn verbose_render_logs_to_stderr() {
    let dir = temp_out("verbose");
    let source = dir.join("page.yaml");
    fs::write(&source, "title: Logged\nbody:\n  children:\n    - type: image\n      src: img/absent.png\n").unwrap();

    let result = run(&["-vv", "render", source.to_str().unwrap(), "--quiet"]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("<title>Logged</title>"));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("DEBUG"), "debug logging enabled: {stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn repeated_keys_render_last_value() {
    let dir = temp_out("repeated-keys");
    let source = dir.join("page.yaml");
    fs::write(&source, "body:\n  children:\n    - type: paragraph\n      text: Twice\n      style:\n        color: red\n        color: blue\n").unwrap();

    let result = run(&["render", source.to_str().unwrap()]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("<p style=\"color: blue\">Twice</p>"));

    let _ = fs::remove_dir_all(&dir);
}
