//! Preview rendering with a last-resort fallback.
//!
//! The compiler itself never fails, but a fault while building a page must
//! not take down the watch loop. Any panic is caught here and turned into the
//! generic "Preview Error" page.

use std::panic::{self, AssertUnwindSafe};

use webforge_core::{AssetResolver, Compiled, Diagnostic, Outcome, Severity, pages};

/// Compile `source`, converting any fault into a fault page.
pub fn render_preview(source: &str, assets: &dyn AssetResolver) -> Compiled {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        webforge_core::compile_with(source, assets)
    }));

    match attempt {
        Ok(compiled) => compiled,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            log::error!("preview render failed: {message}");
            fault(&message)
        }
    }
}

fn fault(message: &str) -> Compiled {
    Compiled {
        html: pages::fault_page(message),
        success: false,
        outcome: Outcome::Invalid,
        diagnostics: vec![Diagnostic {
            severity: Severity::Error,
            message: message.to_string(),
            path: None,
            code: Some("E900".into()),
        }],
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected error while rendering".to_string()
    }
}
