//! Style serialization and the fixed button presets.

use crate::types::{ButtonFill, ButtonSize, ButtonVariant, StyleMap};

/// Serialize a style map as an HTML `style` attribute.
///
/// Returns `""` for an empty map, otherwise ` style="k: v; k2: v2"` with the
/// leading space included. Values are passed through untouched.
pub fn style_attr(style: &StyleMap) -> String {
    if style.is_empty() {
        return String::new();
    }
    let declarations: Vec<String> = style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    format!(" style=\"{}\"", declarations.join("; "))
}

const BASE_BUTTON: [(&str, &str); 8] = [
    ("border", "none"),
    ("border-radius", "8px"),
    ("font-weight", "500"),
    ("cursor", "pointer"),
    ("transition", "all 0.2s ease"),
    ("text-decoration", "none"),
    ("display", "inline-block"),
    ("text-align", "center"),
];

fn size_styles(size: ButtonSize) -> [(&'static str, &'static str); 2] {
    match size {
        ButtonSize::Small => [("padding", "6px 12px"), ("font-size", "0.875rem")],
        ButtonSize::Medium => [("padding", "10px 20px"), ("font-size", "1rem")],
        ButtonSize::Large => [("padding", "14px 28px"), ("font-size", "1.125rem")],
    }
}

/// Palette entry for a variant: solid color, solid text color, ghost tint.
struct Palette {
    color: &'static str,
    on_solid: &'static str,
    tint: &'static str,
}

fn palette(variant: ButtonVariant) -> Palette {
    match variant {
        ButtonVariant::Primary => Palette {
            color: "#4dabf7",
            on_solid: "#ffffff",
            tint: "rgba(77, 171, 247, 0.1)",
        },
        ButtonVariant::Secondary => Palette {
            color: "#6c757d",
            on_solid: "#ffffff",
            tint: "rgba(108, 117, 125, 0.1)",
        },
        ButtonVariant::Success => Palette {
            color: "#28a745",
            on_solid: "#ffffff",
            tint: "rgba(40, 167, 69, 0.1)",
        },
        ButtonVariant::Danger => Palette {
            color: "#dc3545",
            on_solid: "#ffffff",
            tint: "rgba(220, 53, 69, 0.1)",
        },
        ButtonVariant::Warning => Palette {
            color: "#ffc107",
            on_solid: "#212529",
            tint: "rgba(255, 193, 7, 0.1)",
        },
        ButtonVariant::Info => Palette {
            color: "#17a2b8",
            on_solid: "#ffffff",
            tint: "rgba(23, 162, 184, 0.1)",
        },
        ButtonVariant::Light => Palette {
            color: "#f8f9fa",
            on_solid: "#212529",
            tint: "rgba(248, 249, 250, 0.1)",
        },
        ButtonVariant::Dark => Palette {
            color: "#343a40",
            on_solid: "#ffffff",
            tint: "rgba(52, 58, 64, 0.1)",
        },
    }
}

fn important(value: &str) -> String {
    format!("{value} !important")
}

/// Build the preset style of a button: base, then size, then colors.
pub fn button_preset(variant: ButtonVariant, size: ButtonSize, fill: ButtonFill) -> StyleMap {
    let mut style: StyleMap = BASE_BUTTON.into_iter().collect();
    for (key, value) in size_styles(size) {
        style.insert(key, value);
    }

    let p = palette(variant);
    let (background, text, border) = match fill {
        ButtonFill::Solid => (p.color.to_string(), p.on_solid, format!("2px solid {}", p.color)),
        ButtonFill::Outline => (
            "transparent".to_string(),
            p.color,
            format!("2px solid {}", p.color),
        ),
        ButtonFill::Ghost => (
            p.tint.to_string(),
            p.color,
            "2px solid transparent".to_string(),
        ),
    };
    style.insert("background-color", important(&background));
    style.insert("color", important(text));
    style.insert("border", important(&border));
    style
}
