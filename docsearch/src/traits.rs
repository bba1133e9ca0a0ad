//! Trait definitions for search domain abstractions.
//!
//! These traits enable dependency injection and easy testing through mocking.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::types::Document;

/// Error type for search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Malformed page tree: {0}")]
    MalformedTree(String),

    #[error("Document source error: {0}")]
    Source(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for the recent-searches store.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("History entry is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("History store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for listing the documents a session searches over.
///
/// Abstracts where documents come from (a site map, a fixed catalog, a remote index).
///
/// # Example
///
/// ```ignore
/// let source = PageTreeSource::new(tree, 64);
/// let docs = source.list().await?;
/// ```
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List all searchable documents, in emission order.
    async fn list(&self) -> Result<Vec<Document>>;
}

/// Trait for persisting recent queries under a fixed key.
pub trait HistoryStore: Send + Sync {
    /// Load the stored queries, most recent first.
    ///
    /// A store with nothing saved yet returns an empty list.
    fn load(&self) -> std::result::Result<Vec<String>, HistoryError>;

    /// Replace the stored queries.
    fn save(&self, entries: &[String]) -> std::result::Result<(), HistoryError>;
}

impl<H: HistoryStore + ?Sized> HistoryStore for Box<H> {
    fn load(&self) -> std::result::Result<Vec<String>, HistoryError> {
        (**self).load()
    }

    fn save(&self, entries: &[String]) -> std::result::Result<(), HistoryError> {
        (**self).save(entries)
    }
}

/// Trait for moving the host to another route. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebounceToken(pub u64);

impl fmt::Display for DebounceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait for cancellable delayed wake-ups.
///
/// When a scheduled delay elapses the host hands the token back to
/// [`SearchSession::debounce_elapsed`](crate::SearchSession::debounce_elapsed).
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, token: DebounceToken);

    /// Cancelling an unknown or already fired token is a no-op.
    fn cancel(&self, token: DebounceToken);
}
