/*!
 * Documentation to XLIFF 1.2 export.
 *
 * The export is a pure, synchronous pipeline:
 *
 * - `flatten`: block tree of a page into one ordered list
 * - `units`: translation units for blocks, shortcuts, pages and groups
 * - `disambiguate`: unique ids for repeated block ids and clashing derived ids
 * - `escape`: XML-safe text
 * - `document`: the `xliff` envelope around all `trans-unit` fragments
 *
 * Each call builds its own disambiguation table, so concurrent exports never
 * share state.
 */

pub mod disambiguate;
pub mod document;
pub mod escape;
pub mod flatten;
pub mod units;

use log::info;
use serde::Serialize;

use crate::app_config::XliffConfig;
use crate::model::{DocumentationGroup, DocumentationPage};

pub use disambiguate::IdDisambiguator;
pub use document::{assemble_document, render_unit};
pub use escape::{escape_attribute, escape_text};
pub use flatten::{flatten_blocks, flatten_page};
pub use units::{ContextTag, TranslationUnit, UnitExtractor, UnitOrigin};

/// Export pages and groups with the default file settings (`en` → `jp`).
pub fn export_xliff(pages: &[DocumentationPage], groups: &[DocumentationGroup]) -> String {
    export_xliff_with(pages, groups, &XliffConfig::default())
}

/// Export pages and groups with explicit file settings.
pub fn export_xliff_with(
    pages: &[DocumentationPage],
    groups: &[DocumentationGroup],
    config: &XliffConfig,
) -> String {
    export_with_report(pages, groups, config).document
}

/// Run the extraction passes only.
pub fn collect_units(
    pages: &[DocumentationPage],
    groups: &[DocumentationGroup],
) -> Vec<TranslationUnit> {
    UnitExtractor::new().extract(pages, groups)
}

/// Result of one export: the document and what went into it.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub document: String,
    pub report: ExportReport,
}

/// Unit counts of one export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub pages: usize,
    pub groups: usize,
    pub block_units: usize,
    pub shortcut_units: usize,
    pub page_units: usize,
    pub group_units: usize,
    /// Units whose id received a numeric suffix
    pub disambiguated_ids: usize,
}

impl ExportReport {
    fn from_units(
        units: &[TranslationUnit],
        pages: usize,
        groups: usize,
        disambiguated_ids: usize,
    ) -> Self {
        let count = |origin: UnitOrigin| units.iter().filter(|u| u.origin == origin).count();
        Self {
            pages,
            groups,
            block_units: count(UnitOrigin::Block),
            shortcut_units: count(UnitOrigin::Shortcut),
            page_units: count(UnitOrigin::Page),
            group_units: count(UnitOrigin::Group),
            disambiguated_ids,
        }
    }

    pub fn total_units(&self) -> usize {
        self.block_units + self.shortcut_units + self.page_units + self.group_units
    }
}

/// Export and report unit counts.
pub fn export_with_report(
    pages: &[DocumentationPage],
    groups: &[DocumentationGroup],
    config: &XliffConfig,
) -> ExportOutcome {
    let mut extractor = UnitExtractor::new();
    let units = extractor.extract(pages, groups);
    let exported_groups = groups.iter().filter(|g| !g.is_root).count();
    let report = ExportReport::from_units(
        &units,
        pages.len(),
        exported_groups,
        extractor.disambiguated_count(),
    );

    info!(
        "Exported {} units from {} pages and {} groups ({} -> {})",
        report.total_units(),
        report.pages,
        report.groups,
        config.source_language,
        config.target_language
    );

    ExportOutcome {
        document: assemble_document(&units, config),
        report,
    }
}
