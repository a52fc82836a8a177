/*!
 * Pages and groups of a documentation site.
 */

use serde::{Deserialize, Serialize};

use super::block::PageBlock;

/// Configuration header shared by pages and groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemHeader {
    #[serde(default)]
    pub description: String,
}

/// A documentation page with its block tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationPage {
    /// Stable identifier assigned by the documentation store
    pub persistent_id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ItemHeader>,

    /// Top-level blocks in document order
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
}

impl DocumentationPage {
    pub fn new(persistent_id: &str, title: &str) -> Self {
        Self {
            persistent_id: persistent_id.to_string(),
            title: title.to_string(),
            header: None,
            blocks: Vec::new(),
        }
    }

    /// Set the header description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.header = Some(ItemHeader {
            description: description.to_string(),
        });
        self
    }

    /// Set the top-level blocks.
    pub fn with_blocks(mut self, blocks: Vec<PageBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Header description if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        header_description(self.header.as_ref())
    }
}

/// A folder grouping pages in the documentation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationGroup {
    pub persistent_id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ItemHeader>,

    /// The invisible top-level group; never exported
    #[serde(default)]
    pub is_root: bool,
}

impl DocumentationGroup {
    pub fn new(persistent_id: &str, title: &str) -> Self {
        Self {
            persistent_id: persistent_id.to_string(),
            title: title.to_string(),
            header: None,
            is_root: false,
        }
    }

    pub fn root(persistent_id: &str) -> Self {
        Self {
            is_root: true,
            ..Self::new(persistent_id, "")
        }
    }

    /// Set the header description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.header = Some(ItemHeader {
            description: description.to_string(),
        });
        self
    }

    /// Header description if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        header_description(self.header.as_ref())
    }
}

fn header_description(header: Option<&ItemHeader>) -> Option<&str> {
    header
        .map(|h| h.description.as_str())
        .filter(|d| !d.is_empty())
}

/// Everything an export needs, as read from a documentation store dump.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportInput {
    #[serde(default)]
    pub pages: Vec<DocumentationPage>,

    #[serde(default)]
    pub groups: Vec<DocumentationGroup>,
}
