//! Document source backed by the site map.

use async_trait::async_trait;

use crate::traits::{DocumentSource, Result};
use crate::types::{Document, PageTree};
use crate::walker::walk;

/// Lists the content pages of a static page tree.
///
/// The tree is fixed for the lifetime of the source, but it is walked again on every
/// call so that a listing never outlives the tree it came from.
#[derive(Debug, Clone)]
pub struct PageTreeSource {
    tree: PageTree,
    max_depth: usize,
}

impl PageTreeSource {
    pub fn new(tree: PageTree, max_depth: usize) -> Self {
        Self { tree, max_depth }
    }

    pub fn tree(&self) -> &PageTree {
        &self.tree
    }
}

#[async_trait]
impl DocumentSource for PageTreeSource {
    async fn list(&self) -> Result<Vec<Document>> {
        walk(&self.tree, self.max_depth)
    }
}
