//! Fixed-catalog document source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{DocumentSource, Result};
use crate::types::Document;

/// Document source serving a fixed in-memory catalog.
///
/// Stands in for a search backend: an optional latency is awaited on every call,
/// and calls are counted so tests can check how often scoring actually ran.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use docsearch::MockDocumentSource;
///
/// let source = MockDocumentSource::sample().with_latency(Duration::from_millis(500));
/// assert_eq!(source.len(), 5);
/// ```
#[derive(Clone, Default)]
pub struct MockDocumentSource {
    documents: Arc<Vec<Document>>,
    latency: Option<Duration>,
    call_count: Arc<AtomicUsize>,
}

impl MockDocumentSource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(documents),
            ..Default::default()
        }
    }

    /// The built-in standards catalog.
    ///
    /// Categories are display labels only; ranking looks at title and content.
    pub fn sample() -> Self {
        Self::new(vec![
            Document::new(
                "Controller Standards",
                "/controller",
                "Learn about Laravel controller standards and best practices...",
            )
            .with_category("Backend"),
            Document::new(
                "Model Standards",
                "/model",
                "Understanding Laravel model structure and relationships...",
            )
            .with_category("Backend"),
            Document::new(
                "Migration Standards",
                "/migration",
                "Database migration best practices and conventions...",
            )
            .with_category("Database"),
            Document::new(
                "View Standards",
                "/view",
                "Blade template standards and component guidelines...",
            )
            .with_category("Frontend"),
            Document::new(
                "Route Standards",
                "/routing",
                "Laravel routing conventions and RESTful practices...",
            )
            .with_category("Backend"),
        ])
    }

    /// Delay every listing by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of times `list` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for MockDocumentSource {
    async fn list(&self) -> Result<Vec<Document>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.documents.as_ref().clone())
    }
}
