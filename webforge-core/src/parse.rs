//! The YAML boundary.
//!
//! Source text is parsed with `serde_yaml` into a loosely typed value and then
//! lowered into the typed [`Document`] model. Nothing downstream of this module
//! sees a `serde_yaml::Value`.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Value};

use crate::error::{CompileError, Diagnostic};
use crate::types::{
    Body, Button, ButtonFill, ButtonSize, ButtonVariant, Component, Container, DEFAULT_TITLE,
    Document, ListItem, ListMarker, StyleMap,
};

/// Result of lowering a parsed YAML value.
#[derive(Debug, Clone, Default)]
pub struct Lowered {
    /// `None` when the source is empty (the welcome-page case).
    pub document: Option<Document>,
    /// Non-fatal issues found while lowering.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse and lower source text into a typed document.
///
/// Blank input short-circuits to an empty result without invoking the YAML
/// parser. Syntax errors and non-mapping roots are returned as errors.
pub fn parse_document(source: &str) -> Result<Lowered, CompileError> {
    match parse_source(source)? {
        Some(value) => lower(value),
        None => Ok(Lowered::default()),
    }
}

/// Parse source text into a YAML value. `None` for blank input.
pub fn parse_source(source: &str) -> Result<Option<Value>, CompileError> {
    if source.trim().is_empty() {
        return Ok(None);
    }
    let LenientValue(value) = serde_yaml::from_str::<LenientValue>(source)?;
    Ok(Some(value))
}

/// A YAML value whose mappings accept repeated keys, the last one winning.
///
/// `serde_yaml::Value` rejects duplicate keys outright, which would turn a
/// style map with a repeated property into a syntax error.
struct LenientValue(Value);

impl<'de> Deserialize<'de> for LenientValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientVisitor).map(LenientValue)
    }
}

struct LenientVisitor;

impl<'de> Visitor<'de> for LenientVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        LenientValue::deserialize(deserializer).map(|v| v.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(LenientValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((LenientValue(key), LenientValue(value))) = map.next_entry()? {
            // Replaces in place, so a repeated key keeps its first position.
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (tag, variant): (String, _) = data.variant()?;
        let LenientValue(value) = variant.newtype_variant()?;
        if tag.is_empty() {
            return Ok(value);
        }
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

/// Lower a parsed YAML value into a document.
///
/// `null`, a blank string, an empty mapping, and an empty sequence count as an
/// empty document. Every other non-mapping root, including `0` and `false`, is
/// an error.
pub fn lower(value: Value) -> Result<Lowered, CompileError> {
    let root = match value {
        Value::Null => return Ok(Lowered::default()),
        Value::String(s) if s.trim().is_empty() => return Ok(Lowered::default()),
        Value::Mapping(map) if map.is_empty() => return Ok(Lowered::default()),
        Value::Sequence(seq) if seq.is_empty() => return Ok(Lowered::default()),
        Value::Tagged(tagged) => return lower(tagged.value),
        Value::Mapping(map) => map,
        other => {
            return Err(CompileError::RootNotMapping {
                found: describe(&other).to_string(),
            });
        }
    };

    let mut lowerer = Lowerer::default();
    let document = lowerer.document(&root);
    Ok(Lowered {
        document: Some(document),
        diagnostics: lowerer.diagnostics,
    })
}

/// Lower a single component node, discarding diagnostics.
pub fn lower_component(value: &Value) -> Component {
    Lowerer::default().component(value, "component")
}

#[derive(Default)]
struct Lowerer {
    diagnostics: Vec<Diagnostic>,
}

impl Lowerer {
    fn document(&mut self, root: &Mapping) -> Document {
        let title = match root.get("title") {
            None | Some(Value::Null) => DEFAULT_TITLE.to_string(),
            Some(value) => scalar_text(value),
        };

        let body = match root.get("body") {
            None | Some(Value::Null) => Body::default(),
            Some(Value::Mapping(body)) => self.body(body),
            Some(other) => {
                self.diagnostics.push(Diagnostic::warning(
                    "body",
                    "L001",
                    format!("`body` should be a mapping, found {}; ignoring it", describe(other)),
                ));
                Body::default()
            }
        };

        Document { title, body }
    }

    fn body(&mut self, body: &Mapping) -> Body {
        Body {
            style: self.style(body, "body"),
            text: optional_text(body, "text"),
            children: self.children(body, "body"),
        }
    }

    fn children(&mut self, map: &Mapping, path: &str) -> Vec<Component> {
        match map.get("children") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.component(item, &format!("{path}.children[{i}]")))
                .collect(),
            Some(other) => {
                self.diagnostics.push(Diagnostic::warning(
                    &format!("{path}.children"),
                    "L002",
                    format!("`children` should be a sequence, found {}; ignoring it", describe(other)),
                ));
                Vec::new()
            }
        }
    }

    fn style(&mut self, map: &Mapping, path: &str) -> StyleMap {
        match map.get("style") {
            None | Some(Value::Null) => StyleMap::new(),
            Some(Value::Mapping(style)) => style
                .iter()
                .map(|(k, v)| (scalar_text(k), scalar_text(v)))
                .collect(),
            Some(other) => {
                self.diagnostics.push(Diagnostic::warning(
                    &format!("{path}.style"),
                    "L003",
                    format!("`style` should be a mapping, found {}; ignoring it", describe(other)),
                ));
                StyleMap::new()
            }
        }
    }

    fn component(&mut self, value: &Value, path: &str) -> Component {
        let node = match value {
            Value::Mapping(node) => node,
            Value::Tagged(tagged) => return self.component(&tagged.value, path),
            other => {
                self.diagnostics.push(Diagnostic::warning(
                    path,
                    "L004",
                    format!("Expected a component mapping, found {}; skipping it", describe(other)),
                ));
                return Component::Unknown { type_name: None };
            }
        };

        let type_name = node
            .get("type")
            .filter(|v| !v.is_null())
            .map(|v| scalar_text(v).trim().to_lowercase());

        let style = self.style(node, path);
        match type_name.as_deref() {
            Some("header") => Component::Header {
                style,
                text: text_or_empty(node, "text"),
            },
            Some("paragraph") => Component::Paragraph {
                style,
                text: text_or_empty(node, "text"),
            },
            Some("image") => Component::Image {
                style,
                src: text_or_empty(node, "src"),
                alt: text_or_empty(node, "alt"),
            },
            Some("list") => Component::List {
                style,
                items: self.list_items(node, path),
                marker: optional_text(node, "list-type")
                    .map(|t| ListMarker::parse(&t))
                    .unwrap_or_default(),
            },
            Some("button") => Component::Button(Button {
                text: text_or_empty(node, "text"),
                link: optional_text(node, "link").unwrap_or_else(|| "#".to_string()),
                variant: optional_text(node, "variant")
                    .map(|v| ButtonVariant::parse(&v))
                    .unwrap_or_default(),
                size: optional_text(node, "size")
                    .map(|v| ButtonSize::parse(&v))
                    .unwrap_or_default(),
                fill: optional_text(node, "button-style")
                    .map(|v| ButtonFill::parse(&v))
                    .unwrap_or_default(),
                style,
            }),
            Some("section") => Component::Section(self.container(node, style, path)),
            Some("div") => Component::Div(self.container(node, style, path)),
            Some(other) => {
                self.diagnostics.push(Diagnostic::warning(
                    path,
                    "L005",
                    format!("Unknown component type `{other}`; it will not be rendered"),
                ));
                Component::Unknown {
                    type_name: Some(other.to_string()),
                }
            }
            None => {
                self.diagnostics.push(Diagnostic::warning(
                    path,
                    "L006",
                    "Component has no `type`; it will not be rendered",
                ));
                Component::Unknown { type_name: None }
            }
        }
    }

    fn container(&mut self, node: &Mapping, style: StyleMap, path: &str) -> Container {
        Container {
            style,
            text: optional_text(node, "text"),
            children: self.children(node, path),
        }
    }

    fn list_items(&mut self, node: &Mapping, path: &str) -> Vec<ListItem> {
        match node.get("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Mapping(pairs) => ListItem::Pairs(
                        pairs
                            .iter()
                            .map(|(k, v)| (scalar_text(k), scalar_text(v)))
                            .collect(),
                    ),
                    other => ListItem::Plain(scalar_text(other)),
                })
                .collect(),
            Some(other) => {
                self.diagnostics.push(Diagnostic::warning(
                    &format!("{path}.items"),
                    "L007",
                    format!("`items` should be a sequence, found {}; ignoring it", describe(other)),
                ));
                Vec::new()
            }
        }
    }
}

/// Text of an optional field; absent or `null` is `None`.
fn optional_text(map: &Mapping, key: &str) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(scalar_text(value)),
    }
}

fn text_or_empty(map: &Mapping, key: &str) -> String {
    optional_text(map, key).unwrap_or_default()
}

/// Render a YAML value as display text.
///
/// Scalars use their natural form. Nested collections are flattened so a
/// stray structure still shows up on the page instead of vanishing.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => seq.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        Value::Mapping(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", scalar_text(k), scalar_text(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
