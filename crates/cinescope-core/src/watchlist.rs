use cinescope_config::KeyValueStore;
use cinescope_models::WatchlistEntry;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Storage key holding the serialized watchlist
pub const WATCHLIST_KEY: &str = "cinescope_watchlist";

/// The user's saved movies, kept in memory and mirrored to durable storage
///
/// Entries are unique by IMDb id and kept in insertion order. Every change
/// rewrites the whole list to storage; a failed write is logged and the
/// in-memory list stays authoritative for the rest of the session.
pub struct WatchlistStore {
    storage: Arc<dyn KeyValueStore>,
    entries: Vec<WatchlistEntry>,
    ids: HashSet<String>,
    notify: watch::Sender<Vec<WatchlistEntry>>,
}

impl WatchlistStore {
    /// Read the persisted list; missing or unreadable data yields an empty list
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let entries = match storage.get_item(WATCHLIST_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WatchlistEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to parse stored watchlist: {}. Starting empty.", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored watchlist: {}. Starting empty.", e);
                Vec::new()
            }
        };

        // Stored data may repeat an id; the first occurrence wins
        let mut ids = HashSet::new();
        let loaded = entries.len();
        let entries: Vec<WatchlistEntry> = entries
            .into_iter()
            .filter(|e| ids.insert(e.imdb_id.clone()))
            .collect();
        if entries.len() != loaded {
            warn!("Dropped {} duplicate watchlist entries", loaded - entries.len());
        }
        debug!("Loaded watchlist with {} entries", entries.len());

        let (notify, _) = watch::channel(entries.clone());
        Self {
            storage,
            entries,
            ids,
            notify,
        }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_in_watchlist(&self, imdb_id: &str) -> bool {
        self.ids.contains(imdb_id)
    }

    /// Append `entry` unless its id is already present
    pub fn add(&mut self, entry: WatchlistEntry) {
        if self.is_in_watchlist(&entry.imdb_id) {
            debug!("{} already in watchlist", entry.imdb_id);
            return;
        }
        info!("Added '{}' ({}) to watchlist", entry.title, entry.imdb_id);
        self.entries.push(entry);
        self.persist();
    }

    pub fn remove(&mut self, imdb_id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.imdb_id != imdb_id);
        if self.entries.len() == before {
            return;
        }
        info!("Removed {} from watchlist", imdb_id);
        self.persist();
    }

    /// Remove the entry if present, otherwise add it.
    /// Returns whether the movie is in the watchlist afterwards.
    pub fn toggle(&mut self, entry: WatchlistEntry) -> bool {
        if self.is_in_watchlist(&entry.imdb_id) {
            self.remove(&entry.imdb_id);
            false
        } else {
            self.add(entry);
            true
        }
    }

    pub fn clear(&mut self) {
        info!("Cleared {} watchlist entries", self.entries.len());
        self.entries.clear();
        self.persist();
    }

    /// Receiver that observes the list after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<WatchlistEntry>> {
        self.notify.subscribe()
    }

    fn persist(&mut self) {
        self.ids = self.entries.iter().map(|e| e.imdb_id.clone()).collect();
        self.notify.send_replace(self.entries.clone());

        let serialized = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize watchlist: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(WATCHLIST_KEY, &serialized) {
            warn!("Failed to save watchlist: {}", e);
        }
    }
}
