use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a search session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before scoring runs
    pub debounce_ms: u64,
    /// Minimum trimmed query length that opens the dropdown and searches
    pub min_query_len: usize,
    /// Maximum number of ranked results kept
    pub max_results: usize,
    /// Maximum number of recent queries kept
    pub history_limit: usize,
    /// Number of recent queries shown in the history view
    pub history_preview: usize,
    /// Characters of content kept in a result excerpt
    pub excerpt_chars: usize,
    /// Deepest page-tree nesting walked before the tree is rejected
    pub max_tree_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
            max_results: 10,
            history_limit: 10,
            history_preview: 5,
            excerpt_chars: 150,
            max_tree_depth: 64,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
