/*!
 * Block tree flattening.
 *
 * A level is listed in full before any of its subtrees: the result is the
 * sibling list itself followed by the flattened children of each sibling in
 * order. For `[A(children=[A1, A2]), B]` that gives `[A, B, A1, A2]`.
 * Translators rely on this order to locate units, so it is a fixed contract
 * rather than a plain pre-order walk.
 *
 * Recursion depth equals the depth of the tree. Callers are expected to hand
 * in finite, acyclic trees of reasonable depth.
 */

use crate::model::{DocumentationPage, PageBlock};

/// Flatten one page's block tree.
pub fn flatten_page(page: &DocumentationPage) -> Vec<&PageBlock> {
    flatten_blocks(&page.blocks)
}

/// Flatten a sibling list and everything below it.
///
/// Every occurrence is kept, including blocks whose id repeats.
pub fn flatten_blocks(blocks: &[PageBlock]) -> Vec<&PageBlock> {
    let mut flattened: Vec<&PageBlock> = blocks.iter().collect();
    for block in blocks.iter().filter(|b| !b.is_leaf()) {
        flattened.extend(flatten_blocks(&block.children));
    }
    flattened
}
