//! Document compiler: YAML text in, complete HTML page out.

use serde::Serialize;

use crate::assets::{AssetResolver, FsResolver};
use crate::error::Diagnostic;
use crate::pages;
use crate::parse::parse_document;
use crate::render_html::render_component;
use crate::types::Document;

/// Which kind of page a compilation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The rendered document.
    Page,
    /// The onboarding page for an empty document.
    Welcome,
    /// An error page for a source that could not be parsed.
    Invalid,
}

/// Result of compiling one source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compiled {
    /// A complete HTML document, whatever the outcome.
    pub html: String,
    /// False only when the source could not be compiled.
    pub success: bool,
    pub outcome: Outcome,
    /// Structural errors and semantic warnings, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compiled {
    /// Whether the HTML is a real artifact worth saving or opening.
    pub fn is_exportable(&self) -> bool {
        self.outcome == Outcome::Page
    }

    fn welcome() -> Self {
        Self {
            html: pages::welcome_page(),
            success: true,
            outcome: Outcome::Welcome,
            diagnostics: Vec::new(),
        }
    }
}

/// Compile YAML text, resolving local images against the working directory.
pub fn compile(source: &str) -> Compiled {
    compile_with(source, &FsResolver::current_dir())
}

/// Compile YAML text with an explicit asset resolver.
///
/// Always returns a full HTML document. A YAML syntax error (or a root that is
/// not a mapping) yields an error page with `success == false`; anything else
/// renders, with unknown components silently dropped.
pub fn compile_with(source: &str, assets: &dyn AssetResolver) -> Compiled {
    let lowered = match parse_document(source) {
        Ok(lowered) => lowered,
        Err(err) => {
            log::debug!("compile failed: {err}");
            return Compiled {
                html: pages::yaml_error_page(&err.to_string()),
                success: false,
                outcome: Outcome::Invalid,
                diagnostics: vec![err.to_diagnostic()],
            };
        }
    };

    let Some(document) = lowered.document else {
        return Compiled::welcome();
    };

    Compiled {
        html: render_document(&document, assets),
        success: true,
        outcome: Outcome::Page,
        diagnostics: lowered.diagnostics,
    }
}

/// Render a typed document as a complete HTML page.
pub fn render_document(document: &Document, assets: &dyn AssetResolver) -> String {
    let body = &document.body;
    let fragments: Vec<String> = body
        .children
        .iter()
        .map(|child| render_component(child, assets))
        .collect();
    pages::document_page(
        &document.title,
        &body.style,
        body.text.as_deref(),
        &fragments,
    )
}
