//! `webforge-core` compiles YAML page descriptions into standalone HTML.
//!
//! A page description names a `title` and a `body` whose `children` are
//! components (headers, paragraphs, images, lists, buttons, sections, divs).
//! This crate parses the YAML, lowers it into a typed [`Document`], and
//! renders a complete HTML page.
//!
//! # Quick start
//!
//! ```
//! let out = webforge_core::compile_with(
//!     "title: Hi\nbody:\n  children:\n    - type: paragraph\n      text: Hello\n",
//!     &webforge_core::NoAssets,
//! );
//! assert!(out.success);
//! assert!(out.html.contains("<p>Hello</p>"));
//! ```

pub mod assets;
pub mod compile;
pub mod error;
pub mod pages;
pub mod parse;
pub mod render_html;
pub mod style;
pub mod types;
pub mod validate;

pub use assets::{AssetResolver, FsResolver, NoAssets};
pub use compile::{Compiled, Outcome, compile, compile_with, render_document};
pub use error::*;
pub use parse::parse_document;
pub use render_html::render_component;
pub use types::*;

impl Document {
    /// Render this document as a complete HTML page.
    pub fn to_html_page(&self, assets: &dyn AssetResolver) -> String {
        compile::render_document(self, assets)
    }

    /// Validate this document and return any diagnostics.
    pub fn validate(&self) -> Vec<crate::error::Diagnostic> {
        validate::validate(self)
    }
}

impl Component {
    /// Render this component as an HTML fragment.
    pub fn to_html(&self, assets: &dyn AssetResolver) -> String {
        render_html::render_component(self, assets)
    }
}
