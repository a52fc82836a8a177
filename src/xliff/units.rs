/*!
 * Translation unit extraction.
 *
 * Units are produced in several passes over the input, and the pass order is
 * part of the output contract:
 *
 * 1. for each page: text block units in flattened order, then shortcut units
 * 2. title/description units of every page
 * 3. title/description units of every non-root group
 *
 * Every id, whether taken from a block or built from a shortcut, page or
 * group id, is claimed in the run's id table before it is emitted.
 */

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::model::{DocumentationGroup, DocumentationPage, PageBlock, Shortcut, Translatable};

use super::disambiguate::IdDisambiguator;
use super::flatten::flatten_page;

/// One translatable string with its location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationUnit {
    pub id: String,
    pub source: String,
    /// Seeded with the source text; translators overwrite it
    pub target: String,
    pub origin: UnitOrigin,
    pub context: Vec<ContextTag>,
}

impl TranslationUnit {
    fn new(id: String, source: String, origin: UnitOrigin, context: Vec<ContextTag>) -> Self {
        Self {
            id,
            target: source.clone(),
            source,
            origin,
            context,
        }
    }
}

/// Where a unit came from, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOrigin {
    Block,
    Shortcut,
    Page,
    Group,
}

/// A `<context>` element inside the unit's location group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextTag {
    pub context_type: &'static str,
    pub value: String,
}

impl ContextTag {
    fn new(context_type: &'static str, value: impl Into<String>) -> Self {
        Self {
            context_type,
            value: value.into(),
        }
    }
}

/// Which metadata field a page/group/shortcut unit holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Description,
}

impl FieldKind {
    /// Suffix appended to the owner id.
    fn suffix(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::Description => write!(f, "Description"),
        }
    }
}

/// Collects units for one export run.
///
/// Owns the disambiguation table, so a fresh extractor means fresh ids.
#[derive(Debug, Default)]
pub struct UnitExtractor {
    ids: IdDisambiguator,
}

impl UnitExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every pass over the input and return units in output order.
    pub fn extract(
        &mut self,
        pages: &[DocumentationPage],
        groups: &[DocumentationGroup],
    ) -> Vec<TranslationUnit> {
        let mut units = Vec::new();

        for page in pages {
            let before = units.len();
            let flattened = flatten_page(page);
            units.extend(self.block_units(page, &flattened));
            let shortcuts = shortcut_units(page, &flattened);
            units.extend(self.claim(shortcuts));
            debug!(
                "Page '{}': {} blocks flattened, {} units",
                page.persistent_id,
                flattened.len(),
                units.len() - before
            );
        }

        for page in pages {
            let metadata = page_units(page);
            units.extend(self.claim(metadata));
        }

        for group in groups.iter().filter(|g| !g.is_root) {
            let metadata = group_units(group);
            units.extend(self.claim(metadata));
        }

        units
    }

    /// Units for text-bearing blocks, ids run through the disambiguator.
    pub fn block_units(
        &mut self,
        page: &DocumentationPage,
        flattened: &[&PageBlock],
    ) -> Vec<TranslationUnit> {
        let mut units = Vec::new();
        for block in flattened {
            let Translatable::Text(text) = block.kind.translatable() else {
                continue;
            };
            let id = self.ids.assign(&block.id);
            units.push(TranslationUnit::new(
                id,
                text.plain_text(),
                UnitOrigin::Block,
                vec![
                    ContextTag::new("blocktype", block.kind.name()),
                    ContextTag::new("pageid", page.persistent_id.as_str()),
                ],
            ));
        }
        units
    }

    /// Number of unit ids that needed a suffix.
    pub fn disambiguated_count(&self) -> usize {
        self.ids.repeat_count()
    }

    /// Register unit ids built from fixed suffixes, renaming clashes.
    fn claim(&mut self, units: Vec<TranslationUnit>) -> Vec<TranslationUnit> {
        units
            .into_iter()
            .map(|mut unit| {
                unit.id = self.ids.assign(&unit.id);
                unit
            })
            .collect()
    }
}

/// Units for every entry of the page's `Shortcuts` blocks.
///
/// Ids are `{block}-{index}-{field}` as built; [`UnitExtractor::extract`]
/// makes them unique across the run.
pub fn shortcut_units(page: &DocumentationPage, flattened: &[&PageBlock]) -> Vec<TranslationUnit> {
    let mut units = Vec::new();
    for block in flattened {
        let Translatable::Shortcuts(shortcuts) = block.kind.translatable() else {
            continue;
        };
        for (index, shortcut) in shortcuts.iter().enumerate() {
            units.extend(shortcut_entry_units(page, block, index, shortcut));
        }
    }
    units
}

fn shortcut_entry_units(
    page: &DocumentationPage,
    block: &PageBlock,
    index: usize,
    shortcut: &Shortcut,
) -> Vec<TranslationUnit> {
    [
        (FieldKind::Title, shortcut.title_text()),
        (FieldKind::Description, shortcut.description_text()),
    ]
    .into_iter()
    .filter_map(|(field, text)| {
        let text = text?;
        Some(TranslationUnit::new(
            format!("{}-{}-{}", block.id, index, field.suffix()),
            text.to_string(),
            UnitOrigin::Shortcut,
            vec![
                ContextTag::new("blocktype", block.kind.name()),
                ContextTag::new("index", index.to_string()),
                ContextTag::new("subtype", field.to_string()),
                ContextTag::new("pageid", page.persistent_id.as_str()),
            ],
        ))
    })
    .collect()
}

/// Title and, when set, description of a page.
pub fn page_units(page: &DocumentationPage) -> Vec<TranslationUnit> {
    metadata_units(
        &page.persistent_id,
        &page.title,
        page.description(),
        UnitOrigin::Page,
        "pageid",
    )
}

/// Title and, when set, description of a group. Root groups yield nothing.
pub fn group_units(group: &DocumentationGroup) -> Vec<TranslationUnit> {
    if group.is_root {
        return Vec::new();
    }
    metadata_units(
        &group.persistent_id,
        &group.title,
        group.description(),
        UnitOrigin::Group,
        "groupid",
    )
}

fn metadata_units(
    owner_id: &str,
    title: &str,
    description: Option<&str>,
    origin: UnitOrigin,
    owner_context: &'static str,
) -> Vec<TranslationUnit> {
    let fields = [
        (FieldKind::Title, Some(title)),
        (FieldKind::Description, description),
    ];
    fields
        .into_iter()
        .filter_map(|(field, text)| {
            let text = text?;
            Some(TranslationUnit::new(
                format!("{}-{}", owner_id, field.suffix()),
                text.to_string(),
                origin,
                vec![
                    ContextTag::new("type", field.to_string()),
                    ContextTag::new(owner_context, owner_id),
                ],
            ))
        })
        .collect()
}
