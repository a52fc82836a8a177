/*!
 * # xliffdoc - documentation to XLIFF exporter
 *
 * A Rust library that turns a documentation site (pages, groups and nested
 * content blocks) into an XLIFF 1.2 file for translation tools.
 *
 * ## Features
 *
 * - Stable unit order derived from the page block tree
 * - Unique unit ids even when block ids repeat
 * - Units for text blocks, shortcut entries, page and group metadata
 * - XML escaping that keeps literal quotes in translatable text
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `model`: Pages, groups and content blocks as read from the documentation store
 * - `xliff`: The export pipeline:
 *   - `xliff::flatten`: Block tree flattening
 *   - `xliff::units`: Translation unit extraction
 *   - `xliff::disambiguate`: Unique ids for repeated block ids
 *   - `xliff::escape`: XML escaping
 *   - `xliff::document`: XLIFF envelope assembly
 * - `app_config`: Configuration management
 * - `app_controller`: Reading dumps and writing translation files
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod model;
pub mod xliff;

// Re-export main types for easier usage
pub use app_config::{Config, XliffConfig};
pub use errors::{AppError, InputError, OutputError};
pub use model::{BlockKind, DocumentationGroup, DocumentationPage, ExportInput, PageBlock};
pub use xliff::{collect_units, export_xliff, export_xliff_with, TranslationUnit};
