//! WASM bindings for `webforge-core`.
//!
//! Exposes the page compiler to JavaScript via wasm-bindgen. There is no
//! filesystem in the browser, so image sources are always left as written.

use wasm_bindgen::prelude::*;
use webforge_core::NoAssets;

/// Compile a YAML page description.
///
/// Returns a JSON object with `{ html, success, outcome, diagnostics }`.
/// `html` is always a complete document: the page, the welcome page, or an
/// error page when `success` is false.
#[wasm_bindgen]
pub fn compile(input: &str) -> String {
    let compiled = webforge_core::compile_with(input, &NoAssets);
    serde_json::to_string(&compiled).unwrap_or_else(|e| {
        serde_json::json!({
            "html": webforge_core::pages::fault_page(&e.to_string()),
            "success": false,
            "outcome": "invalid",
            "diagnostics": [],
        })
        .to_string()
    })
}

/// Compile a YAML page description and return only the HTML.
#[wasm_bindgen]
pub fn compile_html(input: &str) -> String {
    webforge_core::compile_with(input, &NoAssets).html
}

/// Render a single component, given as YAML, to an HTML fragment.
///
/// Invalid YAML or an unknown component renders to an empty string.
#[wasm_bindgen]
pub fn render_component_html(input: &str) -> String {
    match webforge_core::parse::parse_source(input) {
        Ok(Some(value)) => webforge_core::parse::lower_component(&value).to_html(&NoAssets),
        _ => String::new(),
    }
}

/// The onboarding page shown for an empty document.
#[wasm_bindgen]
pub fn welcome_page() -> String {
    webforge_core::pages::welcome_page()
}

/// Validate a YAML page description and return diagnostics as JSON.
///
/// Returns a JSON array of `{ severity, message, path, code }` objects.
/// An empty array means the document is valid.
#[wasm_bindgen]
pub fn validate(input: &str) -> String {
    let diagnostics = match webforge_core::parse_document(input) {
        Ok(lowered) => {
            let mut all = lowered.diagnostics;
            if let Some(doc) = &lowered.document {
                all.extend(doc.validate());
            }
            all
        }
        Err(err) => vec![err.to_diagnostic()],
    };
    serde_json::to_string(&diagnostics).unwrap_or_else(|_| "[]".to_string())
}
