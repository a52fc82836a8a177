/*!
 * Documentation model consumed by the XLIFF exporter.
 *
 * Pages, groups and the block tree are produced by the documentation store
 * and handed to the exporter fully constructed. The types here only describe
 * that shape; they are read-only for the duration of an export.
 */

pub mod block;
pub mod page;

pub use block::{
    BlockKind, CalloutVariant, PageBlock, RichText, Shortcut, SpanAttribute, TextSpan, Translatable,
};
pub use page::{DocumentationGroup, DocumentationPage, ExportInput, ItemHeader};
