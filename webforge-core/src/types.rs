use serde::Serialize;

/// Title used when a document does not set one.
pub const DEFAULT_TITLE: &str = "Untitled Page";

/// Ordered CSS property map destined for a single `style` attribute.
///
/// Keys are unique. Inserting an existing key replaces its value in place, so
/// serialization order is the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the original position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Overlay every entry of `other` on top of this map.
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as an HTML attribute (leading space included), or `""` when empty.
    pub fn to_attr(&self) -> String {
        crate::style::style_attr(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A parsed page description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub body: Body,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: Body::default(),
        }
    }
}

/// The `body` section of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Body {
    pub style: StyleMap,
    /// Rendered verbatim before the children.
    pub text: Option<String>,
    pub children: Vec<Component>,
}

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    Header {
        style: StyleMap,
        text: String,
    },
    Paragraph {
        style: StyleMap,
        text: String,
    },
    Image {
        style: StyleMap,
        src: String,
        alt: String,
    },
    List {
        style: StyleMap,
        items: Vec<ListItem>,
        marker: ListMarker,
    },
    Button(Button),
    Section(Container),
    Div(Container),
    /// Unrecognized or missing `type`, or a node that is not a mapping.
    /// Renders to nothing.
    Unknown {
        type_name: Option<String>,
    },
}

impl Component {
    /// The lowercase tag this component was declared with.
    pub fn kind(&self) -> &str {
        match self {
            Component::Header { .. } => "header",
            Component::Paragraph { .. } => "paragraph",
            Component::Image { .. } => "image",
            Component::List { .. } => "list",
            Component::Button(_) => "button",
            Component::Section(_) => "section",
            Component::Div(_) => "div",
            Component::Unknown { type_name } => type_name.as_deref().unwrap_or(""),
        }
    }
}

/// Shared shape of `section` and `div`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Container {
    pub style: StyleMap,
    pub text: Option<String>,
    pub children: Vec<Component>,
}

/// A `button` component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub text: String,
    pub link: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub fill: ButtonFill,
    /// Custom overrides, applied on top of the preset.
    pub style: StyleMap,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            text: String::new(),
            link: "#".to_string(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            fill: ButtonFill::default(),
            style: StyleMap::new(),
        }
    }
}

/// One entry of a `list` component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListItem {
    Plain(String),
    /// A single-level mapping; each pair becomes its own `<li>`.
    Pairs(Vec<(String, String)>),
}

/// Marker style of a `list` component, from its `list-type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMarker {
    #[default]
    None,
    Disc,
    Circle,
    Square,
    Decimal,
    DecimalLeadingZero,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

impl ListMarker {
    /// Parse a `list-type` value. Unrecognized values mean no marker.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "disc" => ListMarker::Disc,
            "circle" => ListMarker::Circle,
            "square" => ListMarker::Square,
            "decimal" => ListMarker::Decimal,
            "decimal-leading-zero" => ListMarker::DecimalLeadingZero,
            "lower-roman" => ListMarker::LowerRoman,
            "upper-roman" => ListMarker::UpperRoman,
            "lower-alpha" => ListMarker::LowerAlpha,
            "upper-alpha" => ListMarker::UpperAlpha,
            _ => ListMarker::None,
        }
    }

    /// Value for the `list-style-type` CSS property.
    pub fn as_css(self) -> &'static str {
        match self {
            ListMarker::None => "none",
            ListMarker::Disc => "disc",
            ListMarker::Circle => "circle",
            ListMarker::Square => "square",
            ListMarker::Decimal => "decimal",
            ListMarker::DecimalLeadingZero => "decimal-leading-zero",
            ListMarker::LowerRoman => "lower-roman",
            ListMarker::UpperRoman => "upper-roman",
            ListMarker::LowerAlpha => "lower-alpha",
            ListMarker::UpperAlpha => "upper-alpha",
        }
    }

    /// Whether this marker numbers its items (rendered as `<ol>`).
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            ListMarker::Decimal
                | ListMarker::DecimalLeadingZero
                | ListMarker::LowerRoman
                | ListMarker::UpperRoman
                | ListMarker::LowerAlpha
                | ListMarker::UpperAlpha
        )
    }
}

/// Color scheme of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl ButtonVariant {
    /// Parse a `variant` value, falling back to `Primary`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "secondary" => ButtonVariant::Secondary,
            "success" => ButtonVariant::Success,
            "danger" => ButtonVariant::Danger,
            "warning" => ButtonVariant::Warning,
            "info" => ButtonVariant::Info,
            "light" => ButtonVariant::Light,
            "dark" => ButtonVariant::Dark,
            _ => ButtonVariant::Primary,
        }
    }
}

/// Padding and font size of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Parse a `size` value, falling back to `Medium`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => ButtonSize::Small,
            "large" => ButtonSize::Large,
            _ => ButtonSize::Medium,
        }
    }
}

/// Fill treatment of a button (`button-style`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonFill {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl ButtonFill {
    /// Parse a `button-style` value, falling back to `Solid`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "outline" => ButtonFill::Outline,
            "ghost" => ButtonFill::Ghost,
            _ => ButtonFill::Solid,
        }
    }
}
