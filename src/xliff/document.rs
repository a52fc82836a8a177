/*!
 * XLIFF 1.2 document assembly.
 */

use std::fmt::Write;

use crate::app_config::XliffConfig;

use super::escape::{escape_attribute, escape_text};
use super::units::TranslationUnit;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// Render one unit as a `trans-unit` element, indented for the body.
pub fn render_unit(unit: &TranslationUnit) -> String {
    let mut fragment = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(fragment, r#"      <trans-unit id="{}">"#, escape_attribute(&unit.id));
    let _ = writeln!(fragment, "        <source>{}</source>", escape_text(&unit.source));
    let _ = writeln!(fragment, "        <target>{}</target>", escape_text(&unit.target));
    let _ = writeln!(fragment, r#"        <context-group purpose="location">"#);
    for tag in &unit.context {
        let _ = writeln!(
            fragment,
            r#"          <context context-type="{}">{}</context>"#,
            escape_attribute(tag.context_type),
            escape_text(&tag.value)
        );
    }
    let _ = writeln!(fragment, "        </context-group>");
    let _ = write!(fragment, "      </trans-unit>");
    fragment
}

/// Wrap all units in the `xliff`/`file`/`body` envelope.
pub fn assemble_document(units: &[TranslationUnit], config: &XliffConfig) -> String {
    let body = units
        .iter()
        .map(render_unit)
        .collect::<Vec<_>>()
        .join("\n");

    let mut document = String::new();
    let _ = writeln!(document, "{}", XML_DECLARATION);
    let _ = writeln!(document, r#"<xliff version="1.2" xmlns="{}">"#, XLIFF_NAMESPACE);
    let _ = writeln!(
        document,
        r#"  <file source-language="{}" target-language="{}" datatype="plaintext" original="{}">"#,
        escape_attribute(&config.source_language),
        escape_attribute(&config.target_language),
        escape_attribute(&config.original)
    );
    let _ = writeln!(
        document,
        r#"    <header><tool tool-id="{}" tool-name="{}"/></header>"#,
        escape_attribute(&config.tool_id),
        escape_attribute(&config.tool_name)
    );
    let _ = writeln!(document, "    <body>");
    if !body.is_empty() {
        let _ = writeln!(document, "{}", body);
    }
    let _ = writeln!(document, "    </body>");
    let _ = writeln!(document, "  </file>");
    let _ = writeln!(document, "</xliff>");
    document
}
