//! Semantic checks on a lowered document.
//!
//! These never block rendering. They flag components that will render as
//! nothing or as something the author probably did not intend.

use crate::error::Diagnostic;
use crate::types::{Component, Document};

/// Validate a document and return any diagnostics.
pub fn validate(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (i, child) in doc.body.children.iter().enumerate() {
        validate_component(child, &format!("body.children[{i}]"), &mut diagnostics);
    }
    diagnostics
}

fn validate_component(component: &Component, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    match component {
        Component::Header { text, .. } | Component::Paragraph { text, .. } => {
            if text.trim().is_empty() {
                diagnostics.push(Diagnostic::info(
                    path,
                    "V001",
                    format!("{} has no text", capitalize(component.kind())),
                ));
            }
        }

        Component::Image { src, alt, .. } => {
            if src.trim().is_empty() {
                diagnostics.push(Diagnostic::error(
                    path,
                    "V010",
                    "Image is missing required field: src",
                ));
            }
            if alt.trim().is_empty() {
                diagnostics.push(Diagnostic::info(path, "V011", "Image has no alt text"));
            }
        }

        Component::List { items, .. } => {
            if items.is_empty() {
                diagnostics.push(Diagnostic::info(
                    path,
                    "V020",
                    "List has no items and will not be rendered",
                ));
            }
        }

        Component::Button(button) => {
            if button.text.trim().is_empty() {
                diagnostics.push(Diagnostic::warning(path, "V030", "Button has no text"));
            }
        }

        Component::Section(container) | Component::Div(container) => {
            let has_text = container.text.as_deref().is_some_and(|t| !t.is_empty());
            if !has_text && container.children.is_empty() {
                diagnostics.push(Diagnostic::info(
                    path,
                    "V040",
                    format!("{} has no text and no children", capitalize(component.kind())),
                ));
            }
            for (i, child) in container.children.iter().enumerate() {
                validate_component(child, &format!("{path}.children[{i}]"), diagnostics);
            }
        }

        // Reported while lowering.
        Component::Unknown { .. } => {}
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
