//! Recent-search store implementations.

mod file;
mod memory;

pub use file::FileHistoryStore;
pub use memory::MemoryHistoryStore;

/// Fixed key the recent-searches list is stored under.
pub const HISTORY_KEY: &str = "bms-search-history";
