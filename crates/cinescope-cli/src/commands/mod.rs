pub mod config;
pub mod genre;
pub mod home;
pub mod movie;
pub mod open;
pub mod prompts;
pub mod recent;
pub mod search;
pub mod watchlist;

use cinescope_config::{Config, FileStore, KeyValueStore, PathManager};
use cinescope_core::{MovieGateway, RecentSearches, ResponseCache, WatchlistStore};
use cinescope_omdb::OmdbClient;
use color_eyre::Result;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Shared state for one CLI invocation
///
/// Storage is opened on first use; the gateway is only built for commands
/// that reach the provider, since it needs a valid API key.
pub struct AppContext {
    pub config: Config,
    pub paths: PathManager,
    storage: OnceLock<Arc<FileStore>>,
}

impl AppContext {
    pub fn new(config: Config, paths: PathManager) -> Self {
        Self {
            config,
            paths,
            storage: OnceLock::new(),
        }
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        self.storage
            .get_or_init(|| Arc::new(FileStore::open(self.paths.storage_file())))
            .clone()
    }

    pub fn gateway(&self) -> Result<MovieGateway> {
        self.config
            .validate()
            .map_err(|e| color_eyre::eyre::eyre!("{}. Run 'cinescope config set-api-key' to set one.", e))?;

        let client = OmdbClient::new(self.config.omdb.base_url.clone(), self.config.omdb.api_key.clone());
        let cache = ResponseCache::with_ttl(Duration::from_secs(self.config.cache.ttl_seconds));
        Ok(MovieGateway::with_cache(Arc::new(client), cache))
    }

    pub fn watchlist(&self) -> WatchlistStore {
        WatchlistStore::load(self.storage())
    }

    pub fn recent_searches(&self) -> RecentSearches {
        RecentSearches::load(self.storage())
    }
}
