//! Docsearch - in-page search over a documentation site map.
//!
//! This crate provides the search core behind the documentation site's search box:
//! - **Page-tree walking** that flattens a nested site map into searchable documents
//! - **Substring scoring** over titles and content with a stable ranking
//! - **A search session** state machine that debounces input, tracks the dropdown,
//!   keyboard selection and recent queries
//!
//! # Architecture
//!
//! The session is built around trait abstractions so it runs without a browser or terminal:
//!
//! - [`DocumentSource`] - Where documents come from (page tree, mock catalog)
//! - [`HistoryStore`] - Persistence for recent queries (file, memory)
//! - [`Navigator`] - Route changes when a result is committed
//! - [`Scheduler`] - Cancellable debounce timers (tokio, manual in tests)
//!
//! # Example
//!
//! ```ignore
//! use docsearch::{PageTree, PageTreeSource, SearchConfig, SearchSession, TokioScheduler};
//! use docsearch::store::FileHistoryStore;
//!
//! let source = Arc::new(PageTreeSource::new(tree, config.max_tree_depth));
//! let (scheduler, mut fired) = TokioScheduler::new();
//! let mut session = SearchSession::mount(source, store, navigator, scheduler, config);
//!
//! session.input("contro");
//! let token = fired.recv().await.unwrap();
//! session.run_pending(token).await;
//! assert_eq!(session.results()[0].document.title, "User Guide");
//! ```

mod config;
mod history;
mod scheduler;
mod scorer;
mod session;
mod traits;
mod types;
mod walker;

pub mod source;
pub mod store;

#[cfg(test)]
mod testing;

// Re-export main types
pub use config::SearchConfig;
pub use history::RecentSearches;
pub use scheduler::TokioScheduler;
pub use scorer::{excerpt, rank, score};
pub use session::{SearchOutcome, SearchRequest, SearchSession, SessionKey, SessionPhase};
pub use source::{MockDocumentSource, PageTreeSource};
pub use traits::{
    DebounceToken, DocumentSource, HistoryError, HistoryStore, Navigator, Result, Scheduler,
    SearchError,
};
pub use types::{Document, PageKind, PageNode, PageTree, ScoredResult};
pub use walker::walk;
