use cinescope_models::{MergedPage, MovieDetails, MovieLookup, SearchResponse, SearchResult};
use cinescope_omdb::{api, OmdbTransport};
use std::sync::Arc;
use tracing::{debug, warn};
use crate::cache::{generate_key, ResponseCache};
use crate::error::{normalize, GatewayError};

/// Results per application page
pub const DISPLAY_PAGE_SIZE: usize = 12;

/// Payloads the gateway keeps in its response cache
#[derive(Debug, Clone)]
pub enum CachedPayload {
    Search(SearchResponse),
    Category(Vec<SearchResult>),
    Movie(MovieDetails),
}

/// Entry point for everything the client asks of the movie provider
///
/// Composes provider pages into application pages, caches outcomes and
/// turns transport failures into `GatewayError`.
pub struct MovieGateway {
    transport: Arc<dyn OmdbTransport>,
    cache: ResponseCache<CachedPayload>,
}

/// Concatenate two provider pages in order and cut to `limit`
fn merge_pages(first: Vec<SearchResult>, second: Vec<SearchResult>, limit: usize) -> Vec<SearchResult> {
    first.into_iter().chain(second).take(limit).collect()
}

/// Highest application page whose provider pages fit in a `u32`
pub const MAX_DISPLAY_PAGE: u32 = u32::MAX / 2;

/// Provider pages backing application page `page` (1-based): 2N-1 and 2N.
/// Pages past `MAX_DISPLAY_PAGE` are clamped to it.
pub fn provider_pages_for(page: u32) -> (u32, u32) {
    let page = page.clamp(1, MAX_DISPLAY_PAGE);
    let first = page * 2 - 1;
    (first, first + 1)
}

impl MovieGateway {
    pub fn new(transport: Arc<dyn OmdbTransport>) -> Self {
        Self::with_cache(transport, ResponseCache::new())
    }

    pub fn with_cache(transport: Arc<dyn OmdbTransport>, cache: ResponseCache<CachedPayload>) -> Self {
        Self { transport, cache }
    }

    pub fn cache(&self) -> &ResponseCache<CachedPayload> {
        &self.cache
    }

    /// One provider page of search hits
    ///
    /// A "no results" answer is an empty response, not an error, and is
    /// not cached.
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<SearchResponse, GatewayError> {
        let key = generate_key("search", [("s", query.to_string()), ("page", page.to_string())]);
        if let Some(CachedPayload::Search(cached)) = self.cache.get(&key) {
            return Ok(cached);
        }

        let response = api::search(self.transport.as_ref(), query, page)
            .await
            .map_err(|e| normalize("search", e))?;

        if response.is_found() {
            self.cache.set(&key, CachedPayload::Search(response.clone()));
        }
        Ok(response)
    }

    /// First `limit` hits for a category keyword
    ///
    /// Fetches provider pages 1 and 2 concurrently; if either request
    /// fails the whole call fails.
    pub async fn get_movies_by_category(&self, category: &str, limit: usize) -> Result<Vec<SearchResult>, GatewayError> {
        let key = generate_key("category12", [("s", category.to_string()), ("limit", limit.to_string())]);
        if let Some(CachedPayload::Category(cached)) = self.cache.get(&key) {
            return Ok(cached);
        }

        let transport = self.transport.as_ref();
        let (first, second) = tokio::join!(
            api::search(transport, category, 1),
            api::search(transport, category, 2),
        );
        let first = first.map_err(|e| normalize("category", e))?;
        let second = second.map_err(|e| normalize("category", e))?;

        let combined = merge_pages(first.results, second.results, limit);
        debug!("Category '{}': {} movies", category, combined.len());

        self.cache.set(&key, CachedPayload::Category(combined.clone()));
        Ok(combined)
    }

    /// Application page `page` of a search, built from two provider pages of
/// up to [`PROVIDER_PAGE_SIZE`](cinescope_omdb::PROVIDER_PAGE_SIZE) hits each
    ///
    /// Tolerates a failed second provider page by returning the first
    /// page's hits alone. Used by the search results page and by category
    /// "load more". `has_more` is only an estimate, see `MergedPage`.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<MergedPage, GatewayError> {
        let (first_page, second_page) = provider_pages_for(page);

        let (first, second) = tokio::join!(
            self.search_movies(query, first_page),
            self.search_movies(query, second_page),
        );
        let first = first?;
        let second_results = match second {
            Ok(response) => response.results,
            Err(e) => {
                warn!(
                    "Provider page {} for '{}' failed ({}); using page {} alone",
                    second_page, query, e, first_page
                );
                Vec::new()
            }
        };

        let total_results = first.total_results;
        let results = merge_pages(first.results, second_results, DISPLAY_PAGE_SIZE);
        let has_more = results.len() >= DISPLAY_PAGE_SIZE;

        Ok(MergedPage {
            results,
            total_results,
            total_pages: total_results.div_ceil(DISPLAY_PAGE_SIZE as u32),
            has_more,
        })
    }

    /// Full detail record; only found records are cached
    pub async fn get_movie_by_id(&self, imdb_id: &str) -> Result<MovieLookup, GatewayError> {
        let key = generate_key("movie", [("i", imdb_id.to_string())]);
        if let Some(CachedPayload::Movie(cached)) = self.cache.get(&key) {
            return Ok(MovieLookup::Found(cached));
        }

        let lookup = api::movie_by_id(self.transport.as_ref(), imdb_id)
            .await
            .map_err(|e| normalize("movie lookup", e))?;

        if let MovieLookup::Found(details) = &lookup {
            self.cache.set(&key, CachedPayload::Movie(details.clone()));
        }
        Ok(lookup)
    }

    /// Title lookup, never cached: one title can resolve to different records
    pub async fn get_movie_by_title(&self, title: &str, year: Option<&str>) -> Result<MovieLookup, GatewayError> {
        api::movie_by_title(self.transport.as_ref(), title, year)
            .await
            .map_err(|e| normalize("title lookup", e))
    }
}
