//! Flattens the site map into searchable documents.

use super::traits::{Result, SearchError};
use super::types::{Document, PageNode, PageTree};

/// Walk `tree` depth-first and emit one [`Document`] per content page.
///
/// Pages keep their own route as url, falling back to the nearest ancestor route.
/// Children are always visited, whether or not their parent was emitted. Nesting
/// deeper than `max_depth` rejects the whole tree instead of recursing on.
///
/// The walk uses an explicit stack, so malformed input cannot exhaust the call stack.
pub fn walk(tree: &PageTree, max_depth: usize) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    // (node, inherited route, depth); pushed in reverse so pops come out in document order
    let mut stack: Vec<(&PageNode, &str, usize)> =
        tree.entries().rev().map(|(_, node)| (node, "", 0)).collect();

    while let Some((node, parent_path, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(SearchError::MalformedTree(format!(
                "nesting exceeds {} levels under '{}'",
                max_depth, parent_path
            )));
        }

        let path = node.route().unwrap_or(parent_path);

        if node.kind().is_some_and(|kind| kind.is_content()) {
            documents.push(Document::new(
                node.display_title(),
                path,
                node.content.as_deref().unwrap_or(""),
            ));
        }

        stack.extend(node.children.iter().rev().map(|child| (child, path, depth + 1)));
    }

    Ok(documents)
}
