//! Document source implementations.

mod mock;
mod page_tree;

pub use mock::MockDocumentSource;
pub use page_tree::PageTreeSource;
