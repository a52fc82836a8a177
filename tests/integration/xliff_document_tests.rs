/*!
 * Integration tests reading generated documents back with an XML parser
 */

use std::collections::HashSet;
use anyhow::Result;

use xliffdoc::model::{BlockKind, DocumentationPage, PageBlock, Shortcut};
use xliffdoc::xliff::{export_xliff, export_xliff_with};
use xliffdoc::XliffConfig;
use crate::common;

/// Test that the sample site produces well-formed XML with unique ids
#[test]
fn test_export_withSampleSite_shouldBeWellFormedWithUniqueIds() -> Result<()> {
    let input = common::sample_input();
    let document = export_xliff(&input.pages, &input.groups);

    let units = common::parse_units(&document)?;
    let unique: HashSet<&str> = units.iter().map(|u| u.id.as_str()).collect();

    assert_eq!(units.len(), 13);
    assert_eq!(unique.len(), units.len());
    Ok(())
}

/// Test that text survives escaping and parsing unchanged
#[test]
fn test_export_withSpecialCharacters_shouldRoundTripThroughParser() -> Result<()> {
    let input = common::sample_input();
    let document = export_xliff(&input.pages, &input.groups);

    let units = common::parse_units(&document)?;
    let title = units.iter().find(|u| u.id == "page-style-title").unwrap();

    assert_eq!(title.source, "Tom's \"styling\" & <layout>");
    assert_eq!(title.target, title.source);
    assert!(document.contains("<source>Tom's \"styling\" &amp; &lt;layout&gt;</source>"));
    Ok(())
}

/// Test the context tags of each unit family
#[test]
fn test_export_withSampleSite_shouldCarryLocationContext() -> Result<()> {
    let input = common::sample_input();
    let units = common::parse_units(&export_xliff(&input.pages, &input.groups))?;
    let find = |id: &str| units.iter().find(|u| u.id == id).unwrap();

    let heading = find("heading");
    assert_eq!(heading.context["blocktype"], "Heading");
    assert_eq!(heading.context["pageid"], "page-intro");

    let shortcut = find("links-1-description");
    assert_eq!(shortcut.context["blocktype"], "Shortcuts");
    assert_eq!(shortcut.context["index"], "1");
    assert_eq!(shortcut.context["subtype"], "Description");
    assert_eq!(shortcut.context["pageid"], "page-intro");

    let page = find("page-intro-description");
    assert_eq!(page.context["type"], "Description");
    assert_eq!(page.context["pageid"], "page-intro");

    let group = find("group-basics-title");
    assert_eq!(group.context["type"], "Title");
    assert_eq!(group.context["groupid"], "group-basics");
    Ok(())
}

/// Test that ids with attribute-unsafe characters stay well-formed
#[test]
fn test_export_withQuoteInBlockId_shouldEscapeAttribute() -> Result<()> {
    let page = DocumentationPage::new("p\"1", "Page")
        .with_blocks(vec![PageBlock::text("a&b", "Text")]);

    let units = common::parse_units(&export_xliff(&[page], &[]))?;

    assert_eq!(units[0].id, "a&b");
    assert_eq!(units[1].id, "p\"1-title");
    Ok(())
}

/// Test that pages reusing the same blocks still get unique unit ids
#[test]
fn test_export_withReusedBlocksOnEveryPage_shouldKeepIdsUnique() -> Result<()> {
    let shortcuts = PageBlock::new(
        "links",
        BlockKind::Shortcuts {
            shortcuts: vec![Shortcut::new(Some("Guide"), Some("Read the guide"))],
        },
    );
    let pages: Vec<DocumentationPage> = (0..3)
        .map(|i| {
            DocumentationPage::new(&format!("p{}", i), "Page").with_blocks(vec![
                PageBlock::text("x", "Shared"),
                PageBlock::text("x-1", "Lookalike"),
                shortcuts.clone(),
            ])
        })
        .collect();

    let units = common::parse_units(&export_xliff(&pages, &[]))?;

    let ids: HashSet<&str> = units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids.len(), units.len());
    assert_eq!(units[0].id, "x");
    assert_eq!(units[1].id, "x-1");
    assert_eq!(units[2].id, "links-0-title");
    Ok(())
}

/// Test that envelope settings come from the config
#[test]
fn test_export_withCustomConfig_shouldWriteFileAttributes() {
    let config = XliffConfig {
        source_language: "en".to_string(),
        target_language: "fr".to_string(),
        original: "handbook".to_string(),
        tool_id: "docs-export".to_string(),
        tool_name: "Docs Export".to_string(),
    };

    let document = export_xliff_with(&[], &[], &config);

    assert!(document.contains(
        r#"<file source-language="en" target-language="fr" datatype="plaintext" original="handbook">"#
    ));
    assert!(document.contains(r#"<tool tool-id="docs-export" tool-name="Docs Export"/>"#));
}
