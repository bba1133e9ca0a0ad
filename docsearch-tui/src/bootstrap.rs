use crate::config::AppConfig;
use anyhow::{Context, Result};
use docsearch::store::{FileHistoryStore, MemoryHistoryStore};
use docsearch::{Document, DocumentSource, HistoryStore, MockDocumentSource, PageTree, PageTreeSource};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Site map used when no `site_map` is configured.
pub const BUILTIN_SITE: &str = include_str!("../assets/site.json");

/// Simulated backend latency of the demo catalog.
pub const DEMO_LATENCY: Duration = Duration::from_millis(500);

pub fn page_tree_source(site_map: Option<&Path>, max_depth: usize) -> Result<Arc<dyn DocumentSource>> {
    let tree = match site_map {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read site map at {}", path.display()))?;
            PageTree::from_json(&raw)
                .with_context(|| format!("Failed to parse site map at {}", path.display()))?
        }
        None => PageTree::from_json(BUILTIN_SITE).context("Failed to parse built-in site map")?,
    };
    info!(entries = tree.len(), "Site map loaded");
    Ok(Arc::new(PageTreeSource::new(tree, max_depth)))
}

pub fn demo_source() -> Arc<dyn DocumentSource> {
    Arc::new(MockDocumentSource::sample().with_latency(DEMO_LATENCY))
}

pub fn history_store(config: &AppConfig) -> Result<Box<dyn HistoryStore>> {
    if !config.persist_history {
        return Ok(Box::new(MemoryHistoryStore::new()));
    }
    let dir = config.history_dir()?;
    info!(dir = %dir.display(), "Persisting search history");
    Ok(Box::new(FileHistoryStore::new(dir)))
}

/// List the pages the shell can show. A failing source leaves the site empty.
pub async fn load_pages(source: &dyn DocumentSource) -> Vec<Document> {
    match source.list().await {
        Ok(pages) => pages,
        Err(e) => {
            warn!(error = %e, "Could not list pages");
            Vec::new()
        }
    }
}
