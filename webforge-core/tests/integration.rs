//! Integration tests that compile complete fixture files end-to-end.

use pretty_assertions::assert_eq;
use webforge_core::{Component, NoAssets, Outcome, Severity, compile_with, parse_document};

fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", path.display(), e))
}

#[test]
fn landing_fixture_renders_every_component() {
    let content = read_fixture("landing.yaml");
    let out = compile_with(&content, &NoAssets);

    assert!(out.success);
    assert_eq!(out.outcome, Outcome::Page);
    let html = &out.html;

    assert!(html.contains("<title>Landing Page</title>"));
    assert!(html.contains("<body style=\"background-color: #101418; margin: 0\">"));
    assert!(html.contains("<div class=\"body-text\"><em>Welcome back</em></div>"));
    assert!(html.contains("<h1 style=\"color: red\">Hello</h1>"));
    assert!(html.contains("<p>A short introduction.</p>"));
    assert!(html.contains(
        "<img src=\"https://images.example.com/hero.png\" alt=\"Hero shot\" style=\"width: 100%\""
    ));
    assert!(html.contains(
        "<div><ol style=\"list-style-type: decimal\"><li>First</li><li>Second</li></ol></div>"
    ));
    assert!(html.contains(
        "<ul style=\"list-style-type: none\"><li><strong>Name:</strong> Ada</li><li><strong>Role:</strong> Engineer</li><li>plain entry</li></ul>"
    ));
    assert!(html.contains("<a href=\"#start\"><button style=\""));
    assert!(html.contains(
        "<section><div class=\"section-text\">Details</div><p>Inside the section</p><div><div class=\"div-text\">Nested note</div><h1>Deep</h1></div></section>"
    ));
    assert!(!html.contains("carousel"));
}

#[test]
fn landing_fixture_button_overrides() {
    let content = read_fixture("landing.yaml");
    let html = compile_with(&content, &NoAssets).html;

    let start = html.find("<button style=\"").expect("button rendered");
    let end = start + html[start..].find('>').expect("button tag closes");
    let button_tag = &html[start..end];

    assert!(button_tag.contains("; color: #000000"));
    assert!(button_tag.contains("background-color: transparent !important"));
    assert!(button_tag.contains("border: 2px solid #dc3545 !important"));
    assert!(button_tag.contains("padding: 14px 28px"));
}

#[test]
fn landing_fixture_reports_unknown_component() {
    let content = read_fixture("landing.yaml");
    let out = compile_with(&content, &NoAssets);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].code.as_deref(), Some("L005"));
    assert_eq!(out.diagnostics[0].path.as_deref(), Some("body.children[7]"));
}

#[test]
fn malformed_fixture_is_error_page() {
    let content = read_fixture("malformed.yaml");
    let out = compile_with(&content, &NoAssets);

    assert!(!out.success);
    assert_eq!(out.outcome, Outcome::Invalid);
    let parser_message = serde_yaml::from_str::<serde_yaml::Value>(&content)
        .unwrap_err()
        .to_string();
    assert!(out.html.contains(&parser_message));
    assert!(out.html.contains("<!DOCTYPE html>"));
    assert!(out.html.trim_end().ends_with("</html>"));
}

#[test]
fn empty_fixture_is_welcome_page() {
    let content = read_fixture("empty.yaml");
    let out = compile_with(&content, &NoAssets);
    assert!(out.success);
    assert_eq!(out.outcome, Outcome::Welcome);
    assert!(out.html.contains("window.webforgeLoadExample()"));
}

#[test]
fn warnings_fixture_diagnostics() {
    let content = read_fixture("warnings.yaml");
    let lowered = parse_document(&content).expect("fixture parses");
    let doc = lowered.document.expect("fixture has a document");

    let lowering: Vec<_> = lowered
        .diagnostics
        .iter()
        .map(|d| d.code.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(lowering, vec!["L004"]);

    let semantic = doc.validate();
    let errors: Vec<_> = semantic
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1, "image without src: {semantic:?}");
    assert!(semantic.iter().any(|d| d.code.as_deref() == Some("V020")));
    assert!(semantic.iter().any(|d| d.code.as_deref() == Some("V030")));

    assert!(matches!(doc.body.children[3], Component::Unknown { type_name: None }));
}

#[test]
fn local_images_resolve_against_base_dir() {
    let dir = std::env::temp_dir().join("webforge-integration-images");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("img")).unwrap();
    std::fs::write(dir.join("img/logo.png"), b"png").unwrap();

    let source = "body:\n  children:\n    - type: image\n      src: /img/logo.png\n      alt: Logo\n    - type: image\n      src: img/missing.png\n";
    let resolver = webforge_core::FsResolver::with_base(dir.clone());
    let html = compile_with(source, &resolver).html;

    let expected = webforge_core::assets::file_url(&dir.join("img/logo.png"));
    assert!(html.contains(&format!("<img src=\"{expected}\" alt=\"Logo\"")));
    assert!(html.contains("<img src=\"img/missing.png\" alt=\"\""));

    let _ = std::fs::remove_dir_all(&dir);
}

fn render_list_page(list_type: &str) -> String {
    let source = format!(
        "body:\n  children:\n    - type: list\n      list-type: {list_type}\n      style:\n        margin: 4px\n      items:\n        - alpha\n        - beta\n"
    );
    let out = compile_with(&source, &NoAssets);
    assert!(out.success);
    out.html
}

#[test]
fn list_type_none_is_unmarked_ul() {
    let html = render_list_page("none");
    assert!(html.contains(
        "<div style=\"margin: 4px\"><ul style=\"margin: 4px; list-style-type: none\"><li>alpha</li><li>beta</li></ul></div>"
    ));
    assert!(!html.contains("<ol"));
}

#[test]
fn bullet_markers_pass_through_to_ul() {
    for marker in ["disc", "circle", "square"] {
        let html = render_list_page(marker);
        let expected = format!(
            "<ul style=\"margin: 4px; list-style-type: {marker}\"><li>alpha</li><li>beta</li></ul>"
        );
        assert!(html.contains(&expected), "{marker}: {html}");
        assert!(!html.contains("<ol"));
    }
}

#[test]
fn lower_roman_is_ol() {
    let html = render_list_page("lower-roman");
    assert!(html.contains("<ol style=\"margin: 4px; list-style-type: lower-roman\">"));
}
