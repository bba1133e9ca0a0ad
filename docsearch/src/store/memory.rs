//! In-memory history store.

use std::sync::{Arc, RwLock};

use super::HISTORY_KEY;
use crate::traits::{HistoryError, HistoryStore};

/// History store that keeps the encoded entry in memory.
///
/// Holds the raw JSON text rather than parsed entries, so it behaves like a real
/// key-value store: whatever was written is what the next load has to decode.
///
/// # Examples
///
/// ```
/// use docsearch::store::MemoryHistoryStore;
///
/// let store = MemoryHistoryStore::new();
/// // or seeded with a raw stored value:
/// let store = MemoryHistoryStore::with_raw(r#"["controller","model"]"#);
/// ```
#[derive(Clone, Default)]
pub struct MemoryHistoryStore {
    raw: Arc<RwLock<Option<String>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an already encoded value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// The currently stored encoded value.
    pub fn raw(&self) -> Option<String> {
        self.raw.read().ok().and_then(|raw| raw.clone())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        let raw = self
            .raw
            .read()
            .map_err(|_| HistoryError::Unavailable(format!("{} lock poisoned", HISTORY_KEY)))?;
        match raw.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[String]) -> Result<(), HistoryError> {
        let encoded = serde_json::to_string(entries)?;
        let mut raw = self
            .raw
            .write()
            .map_err(|_| HistoryError::Unavailable(format!("{} lock poisoned", HISTORY_KEY)))?;
        *raw = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        assert!(MemoryHistoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryHistoryStore::new();
        store
            .save(&["view".to_string(), "model".to_string()])
            .unwrap();

        assert_eq!(store.raw().as_deref(), Some(r#"["view","model"]"#));
        assert_eq!(store.load().unwrap(), vec!["view", "model"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let store = MemoryHistoryStore::with_raw("{oops");
        assert!(matches!(store.load(), Err(HistoryError::Json(_))));
    }
}
