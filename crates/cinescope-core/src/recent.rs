use cinescope_config::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

pub const RECENT_SEARCHES_KEY: &str = "cinescope_recent_searches";
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first list of submitted search queries
///
/// Queries are de-duplicated case-insensitively; re-submitting one moves
/// it to the front with its latest spelling.
pub struct RecentSearches {
    storage: Arc<dyn KeyValueStore>,
    queries: Vec<String>,
}

impl RecentSearches {
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let queries = match storage.get_item(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                warn!("Failed to parse recent searches: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read recent searches: {}", e);
                Vec::new()
            }
        };
        Self { storage, queries }
    }

    pub fn list(&self) -> &[String] {
        &self.queries
    }

    /// Put `query` at the front; blank queries are ignored
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let lowered = query.to_lowercase();
        self.queries.retain(|q| q.to_lowercase() != lowered);
        self.queries.insert(0, query.to_string());
        self.queries.truncate(MAX_RECENT_SEARCHES);

        match serde_json::to_string(&self.queries) {
            Ok(serialized) => {
                if let Err(e) = self.storage.set_item(RECENT_SEARCHES_KEY, &serialized) {
                    warn!("Failed to save recent searches: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize recent searches: {}", e),
        }
    }

    pub fn clear(&mut self) {
        self.queries.clear();
        if let Err(e) = self.storage.remove_item(RECENT_SEARCHES_KEY) {
            warn!("Failed to clear recent searches: {}", e);
        }
    }
}
