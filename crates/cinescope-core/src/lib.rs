pub mod cache;
pub mod error;
pub mod gateway;
pub mod lifetime;
pub mod preload;
pub mod recent;
pub mod watchlist;

#[cfg(test)]
mod test_support;

pub use cache::{generate_key, Clock, ResponseCache, SystemClock, DEFAULT_TTL};
pub use error::GatewayError;
pub use gateway::{provider_pages_for, CachedPayload, MovieGateway, DISPLAY_PAGE_SIZE, MAX_DISPLAY_PAGE};
pub use lifetime::{ViewLifetime, ViewScope};
pub use preload::{preload_movie, Preload, Route};
pub use recent::{RecentSearches, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY};
pub use watchlist::{WatchlistStore, WATCHLIST_KEY};
