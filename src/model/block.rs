/*!
 * Content blocks of a documentation page.
 *
 * A page body is a tree of [`PageBlock`]s. Every block has a structural id,
 * an ordered list of children and a kind-specific payload. The structural id
 * comes from the documentation store and is not unique within a page: the
 * same id shows up again when a block is reused as a template.
 */

use serde::{Deserialize, Serialize};

/// One node of a page's content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBlock {
    /// Structural identifier, may repeat within a page
    pub id: String,

    /// Kind and payload, serialized as a `"type"`-tagged object
    #[serde(flatten)]
    pub kind: BlockKind,

    /// Nested blocks in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageBlock>,
}

impl PageBlock {
    /// Create a leaf block.
    pub fn new(id: &str, kind: BlockKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a plain text block with a single unstyled span.
    pub fn text(id: &str, text: &str) -> Self {
        Self::new(id, BlockKind::Text { text: RichText::plain(text) })
    }

    /// Replace the children of this block.
    pub fn with_children(mut self, children: Vec<PageBlock>) -> Self {
        self.children = children;
        self
    }

    /// Whether the block has nested blocks.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Closed set of block kinds known to the documentation store.
///
/// Only the text-bearing kinds and `Shortcuts` carry translatable strings;
/// see [`BlockKind::translatable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    Text {
        text: RichText,
    },
    Heading {
        text: RichText,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Callout {
        text: RichText,
        #[serde(default)]
        variant: CalloutVariant,
    },
    Quote {
        text: RichText,
    },
    OrderedList {
        text: RichText,
    },
    UnorderedList {
        text: RichText,
    },
    Shortcuts {
        #[serde(default)]
        shortcuts: Vec<Shortcut>,
    },
    Code {
        text: RichText,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Embed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Divider,
    Table,
    Column,
    ColumnItem,
    Tabs,
    TabItem,
    Token,
    Component,
    FigmaFrames,
}

/// What a block contributes to the translation file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translatable<'a> {
    /// One unit holding the block's plain text
    Text(&'a RichText),
    /// Up to two units per shortcut entry
    Shortcuts(&'a [Shortcut]),
    /// Traversed for children only
    Nothing,
}

impl BlockKind {
    /// Kind name as it appears in the `blocktype` context of a unit.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "Text",
            Self::Heading { .. } => "Heading",
            Self::Callout { .. } => "Callout",
            Self::Quote { .. } => "Quote",
            Self::OrderedList { .. } => "OrderedList",
            Self::UnorderedList { .. } => "UnorderedList",
            Self::Shortcuts { .. } => "Shortcuts",
            Self::Code { .. } => "Code",
            Self::Image { .. } => "Image",
            Self::Embed { .. } => "Embed",
            Self::Divider => "Divider",
            Self::Table => "Table",
            Self::Column => "Column",
            Self::ColumnItem => "ColumnItem",
            Self::Tabs => "Tabs",
            Self::TabItem => "TabItem",
            Self::Token => "Token",
            Self::Component => "Component",
            Self::FigmaFrames => "FigmaFrames",
        }
    }

    /// Decide export eligibility.
    ///
    /// Adding a kind forces a decision here. Code stays untranslated on purpose,
    /// snippets are not prose.
    pub fn translatable(&self) -> Translatable<'_> {
        match self {
            Self::Text { text }
            | Self::Heading { text, .. }
            | Self::Callout { text, .. }
            | Self::Quote { text }
            | Self::OrderedList { text }
            | Self::UnorderedList { text } => Translatable::Text(text),
            Self::Shortcuts { shortcuts } => Translatable::Shortcuts(shortcuts),
            Self::Code { .. }
            | Self::Image { .. }
            | Self::Embed { .. }
            | Self::Divider
            | Self::Table
            | Self::Column
            | Self::ColumnItem
            | Self::Tabs
            | Self::TabItem
            | Self::Token
            | Self::Component
            | Self::FigmaFrames => Translatable::Nothing,
        }
    }
}

fn default_heading_level() -> u8 {
    1
}

/// Callout flavour, only relevant for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Styled text made of consecutive spans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub spans: Vec<TextSpan>,
}

impl RichText {
    /// Rich text with a single unstyled span.
    pub fn plain(text: &str) -> Self {
        Self {
            spans: vec![TextSpan::new(text)],
        }
    }

    pub fn from_spans(spans: Vec<TextSpan>) -> Self {
        Self { spans }
    }

    /// Literal text of all spans joined without separator, styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// A run of text sharing the same styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<SpanAttribute>,
}

impl TextSpan {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            attributes: Vec::new(),
        }
    }

    /// Add a styling attribute to the span.
    pub fn with_attribute(mut self, attribute: SpanAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Span-level styling metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpanAttribute {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Link { link: String },
}

/// Entry of a `Shortcuts` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shortcut {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link target, never translated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Shortcut {
    pub fn new(title: Option<&str>, description: Option<&str>) -> Self {
        Self {
            title: title.map(|s| s.to_string()),
            description: description.map(|s| s.to_string()),
            url: None,
        }
    }

    /// Title if present and non-empty.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Description if present and non-empty.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
