/*!
 * XML escaping for unit text and attribute values.
 */

use quick_xml::escape::escape;

/// Escape text placed inside element content.
///
/// All five XML-significant characters are escaped, then `&quot;` and
/// `&apos;` are turned back into literal quotes. Quotes are harmless in
/// character data and translators expect to see them verbatim.
///
/// Not idempotent: escaping the output again double-escapes `&amp;`.
pub fn escape_text(raw: &str) -> String {
    escape(raw)
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attribute(raw: &str) -> String {
    escape(raw).into_owned()
}
