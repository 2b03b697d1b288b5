//! Component renderer.
//!
//! Maps one [`Component`] to an HTML fragment. Text and attribute values are
//! interpolated as written: a page description is trusted input and may carry
//! inline markup on purpose.

use crate::assets::{AssetResolver, resolve_image_src};
use crate::style::{button_preset, style_attr};
use crate::types::{Button, Component, Container, ListItem, ListMarker, StyleMap};

/// Shown in place of an image that fails to load.
const IMAGE_FALLBACK: &str = "this.onerror=null; this.src='data:image/svg+xml;charset=UTF-8,%3Csvg%20width%3D%22800%22%20height%3D%22600%22%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%3E%3Crect%20width%3D%22800%22%20height%3D%22600%22%20fill%3D%22%23f0f0f0%22%2F%3E%3Ctext%20x%3D%2250%25%22%20y%3D%2250%25%22%20font-family%3D%22Arial%22%20font-size%3D%2230%22%20fill%3D%22%23999%22%20text-anchor%3D%22middle%22%20dominant-baseline%3D%22middle%22%3EImage%20not%20found%3C%2Ftext%3E%3C%2Fsvg%3E';";

/// Render a component and its subtree as an HTML fragment.
///
/// Unknown components render to an empty string.
pub fn render_component(component: &Component, assets: &dyn AssetResolver) -> String {
    match component {
        Component::Header { style, text } => format!("<h1{}>{text}</h1>", style_attr(style)),

        Component::Paragraph { style, text } => format!("<p{}>{text}</p>", style_attr(style)),

        Component::Image { style, src, alt } => {
            let src = resolve_image_src(src, assets);
            format!(
                "<img src=\"{src}\" alt=\"{alt}\"{} onerror=\"{IMAGE_FALLBACK}\">",
                style_attr(style)
            )
        }

        Component::List {
            style,
            items,
            marker,
        } => render_list(style, items, *marker),

        Component::Button(button) => render_button(button),

        Component::Section(container) => {
            render_container("section", "section-text", container, assets)
        }

        Component::Div(container) => render_container("div", "div-text", container, assets),

        Component::Unknown { .. } => String::new(),
    }
}

/// Render a sequence of components, concatenated in order.
pub fn render_children(children: &[Component], assets: &dyn AssetResolver) -> String {
    children
        .iter()
        .map(|child| render_component(child, assets))
        .collect()
}

fn render_list(style: &StyleMap, items: &[ListItem], marker: ListMarker) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut list_style = style.clone();
    list_style.insert("list-style-type", marker.as_css());
    let tag = if marker.is_ordered() { "ol" } else { "ul" };

    let mut html = format!("<div{}><{tag}{}>", style_attr(style), style_attr(&list_style));
    for item in items {
        match item {
            ListItem::Plain(text) => html.push_str(&format!("<li>{text}</li>")),
            ListItem::Pairs(pairs) => {
                for (key, value) in pairs {
                    html.push_str(&format!("<li><strong>{key}:</strong> {value}</li>"));
                }
            }
        }
    }
    html.push_str(&format!("</{tag}></div>"));
    html
}

fn render_button(button: &Button) -> String {
    let mut style = button_preset(button.variant, button.size, button.fill);
    style.merge(&button.style);
    format!(
        "<div class=\"buttons\"><a href=\"{}\"><button{}>{}</button></a></div>",
        button.link,
        style_attr(&style),
        button.text,
    )
}

fn render_container(
    tag: &str,
    text_class: &str,
    container: &Container,
    assets: &dyn AssetResolver,
) -> String {
    let mut html = format!("<{tag}{}>", style_attr(&container.style));
    if let Some(text) = container.text.as_deref().filter(|t| !t.is_empty()) {
        html.push_str(&format!("<div class=\"{text_class}\">{text}</div>"));
    }
    html.push_str(&render_children(&container.children, assets));
    html.push_str(&format!("</{tag}>"));
    html
}
