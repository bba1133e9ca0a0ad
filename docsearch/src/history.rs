//! Recent queries, most recent first.

/// Bounded, duplicate-free list of recently committed queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearches {
    entries: Vec<String>,
    limit: usize,
}

impl RecentSearches {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Rebuild from stored entries, dropping blanks and later duplicates, then capping.
    pub fn from_entries(entries: Vec<String>, limit: usize) -> Self {
        let mut recent = Self::new(limit);
        for entry in entries {
            let entry = entry.trim();
            if !entry.is_empty() && !recent.entries.iter().any(|e| e == entry) {
                recent.entries.push(entry.to_string());
            }
        }
        recent.entries.truncate(limit);
        recent
    }

    /// Move `query` to the front. Returns false for blank queries, which are not kept.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
