/*!
 * Tests for the export pipeline through the public API
 */

use xliffdoc::model::{BlockKind, DocumentationGroup, DocumentationPage, PageBlock, Shortcut};
use xliffdoc::xliff::{collect_units, export_xliff, flatten_blocks, UnitOrigin};
use crate::common;

fn ids(units: &[xliffdoc::TranslationUnit]) -> Vec<&str> {
    units.iter().map(|u| u.id.as_str()).collect()
}

/// Test the full unit order of the sample site
#[test]
fn test_collect_units_withSampleSite_shouldFollowPassOrder() {
    let input = common::sample_input();

    let units = collect_units(&input.pages, &input.groups);

    assert_eq!(
        ids(&units),
        vec![
            "heading",
            "para",
            "para-1",
            "links-0-title",
            "links-0-description",
            "links-1-description",
            "callout",
            "para-2",
            "page-intro-title",
            "page-intro-description",
            "page-style-title",
            "group-basics-title",
            "group-basics-description",
        ]
    );
}

/// Test that span styling is dropped from the source text
#[test]
fn test_collect_units_withStyledSpans_shouldUsePlainText() {
    let input = common::sample_input();

    let units = collect_units(&input.pages, &input.groups);
    let callout = units.iter().find(|u| u.id == "callout").unwrap();

    assert_eq!(callout.source, "Use tokens & components");
    assert_eq!(callout.target, callout.source);
    assert_eq!(callout.origin, UnitOrigin::Block);
}

/// Test the documented flatten order for a two-level tree
#[test]
fn test_flatten_blocks_withChildren_shouldListTopLevelFirst() {
    let blocks = vec![
        PageBlock::text("A", "a").with_children(vec![
            PageBlock::text("A1", "a1"),
            PageBlock::text("A2", "a2"),
        ]),
        PageBlock::text("B", "b"),
    ];

    let order: Vec<&str> = flatten_blocks(&blocks).iter().map(|b| b.id.as_str()).collect();

    assert_eq!(order, vec!["A", "B", "A1", "A2"]);
}

/// Test that two eligible blocks sharing an id get x and x-1
#[test]
fn test_export_xliff_withDuplicateIds_shouldSuffixSecond() {
    let page = DocumentationPage::new("p", "Page").with_blocks(vec![
        PageBlock::text("x", "first"),
        PageBlock::new("wrapper", BlockKind::Tabs).with_children(vec![PageBlock::text("x", "second")]),
    ]);

    let document = export_xliff(&[page], &[]);

    assert!(document.contains(r#"<trans-unit id="x">"#));
    assert!(document.contains(r#"<trans-unit id="x-1">"#));
    assert!(!document.contains(r#"<trans-unit id="wrapper">"#));
}

/// Test the escaping contract on a unit source
#[test]
fn test_export_xliff_withQuotesAndAmpersand_shouldEscapeOnlyAmpersand() {
    let page = DocumentationPage::new("p", "Page")
        .with_blocks(vec![PageBlock::text("b", r#"He said "hi" & left"#)]);

    let document = export_xliff(&[page], &[]);

    assert!(document.contains(r#"<source>He said "hi" &amp; left</source>"#));
    assert!(document.contains(r#"<target>He said "hi" &amp; left</target>"#));
}

/// Test that a page without header description has no description unit
#[test]
fn test_export_xliff_withoutDescription_shouldOmitDescriptionUnit() {
    let page = DocumentationPage::new("p", "Page");

    let document = export_xliff(&[page], &[]);

    assert!(document.contains(r#"<trans-unit id="p-title">"#));
    assert!(!document.contains("p-description"));
}

/// Test a shortcut entry that only has a description
#[test]
fn test_collect_units_withDescriptionOnlyShortcut_shouldEmitOneUnit() {
    let page = DocumentationPage::new("p", "Page").with_blocks(vec![PageBlock::new(
        "s",
        BlockKind::Shortcuts { shortcuts: vec![Shortcut::new(None, Some("More"))] },
    )]);

    let units = collect_units(&[page], &[]);
    let shortcut_units: Vec<_> = units.iter().filter(|u| u.origin == UnitOrigin::Shortcut).collect();

    assert_eq!(shortcut_units.len(), 1);
    assert_eq!(shortcut_units[0].id, "s-0-description");
    assert_eq!(shortcut_units[0].source, "More");
}

/// Test that root groups never produce units
#[test]
fn test_collect_units_withRootGroup_shouldSkipIt() {
    let groups = vec![DocumentationGroup::root("root").with_description("Root description")];

    assert!(collect_units(&[], &groups).is_empty());
}

/// Test that empty input still yields a complete envelope
#[test]
fn test_export_xliff_withEmptyInput_shouldProduceEnvelopeOnly() {
    let document = export_xliff(&[], &[]);

    assert!(document.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
    assert!(document.contains(r#"target-language="jp""#));
    assert!(!document.contains("<trans-unit"));
}
