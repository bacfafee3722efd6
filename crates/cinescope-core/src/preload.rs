use cinescope_models::{MovieDetails, MovieLookup};
use tracing::{debug, warn};
use crate::gateway::MovieGateway;

/// Screens of the client, addressed by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Movie(String),
    Search { query: String, page: u32 },
    Watchlist,
    Genre(String),
}

impl Route {
    /// Resolve a path such as `/movie/tt0133093` or `/search?q=alien&page=2`.
    /// Anything unrecognized resolves to `Home`.
    pub fn parse(path: &str) -> Route {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["home"] => Route::Home,
            ["movie", id] => Route::Movie(id.to_string()),
            ["watchlist"] => Route::Watchlist,
            ["genre", name] => Route::Genre(decode_component(name)),
            ["search"] => {
                let mut search_query = String::new();
                let mut page = 1;
                for pair in query.split('&') {
                    match pair.split_once('=') {
                        Some(("q", value)) => search_query = decode_component(value),
                        Some(("page", value)) => page = value.parse::<u32>().unwrap_or(1).max(1),
                        _ => {}
                    }
                }
                Route::Search {
                    query: search_query,
                    page,
                }
            }
            _ => {
                debug!("Unknown route {}, falling back to home", path);
                Route::Home
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Movie(id) => format!("/movie/{}", id),
            Route::Search { query, page } => format!("/search?q={}&page={}", urlencoding::encode(query), page),
            Route::Watchlist => "/watchlist".to_string(),
            Route::Genre(name) => format!("/genre/{}", urlencoding::encode(name)),
        }
    }
}

fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    match urlencoding::decode(&value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value,
    }
}

/// Outcome of resolving a screen's data before showing it
#[derive(Debug, Clone, PartialEq)]
pub enum Preload<T> {
    Ready(T),
    Redirect(Route),
}

/// Fetch details before navigating to a movie screen
///
/// A missing id, a failed lookup and an unknown id all redirect home.
pub async fn preload_movie(gateway: &MovieGateway, imdb_id: Option<&str>) -> Preload<MovieDetails> {
    let Some(imdb_id) = imdb_id.filter(|id| !id.trim().is_empty()) else {
        return Preload::Redirect(Route::Home);
    };

    match gateway.get_movie_by_id(imdb_id).await {
        Ok(MovieLookup::Found(details)) => Preload::Ready(details),
        Ok(MovieLookup::NotFound(message)) => {
            warn!("Movie {} not found: {}", imdb_id, message);
            Preload::Redirect(Route::Home)
        }
        Err(e) => {
            warn!("Failed to preload movie {}: {}", imdb_id, e);
            Preload::Redirect(Route::Home)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use cinescope_omdb::OmdbRequest;
    use std::sync::Arc;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/home"), Route::Home);
        assert_eq!(Route::parse("/movie/tt0133093"), Route::Movie("tt0133093".to_string()));
        assert_eq!(Route::parse("/watchlist"), Route::Watchlist);
        assert_eq!(Route::parse("/genre/sci%20fi"), Route::Genre("sci fi".to_string()));
        assert_eq!(
            Route::parse("/search?q=star+wars&page=3"),
            Route::Search {
                query: "star wars".to_string(),
                page: 3
            }
        );
    }

    #[test]
    fn test_unknown_paths_go_home() {
        assert_eq!(Route::parse("/nope"), Route::Home);
        assert_eq!(Route::parse("/movie"), Route::Home);
        assert_eq!(Route::parse("/movie/a/b"), Route::Home);
    }

    #[test]
    fn test_search_page_defaults_to_one() {
        assert_eq!(
            Route::parse("/search?q=alien&page=zero"),
            Route::Search {
                query: "alien".to_string(),
                page: 1
            }
        );
        assert_eq!(
            Route::parse("/search?q=alien&page=0"),
            Route::Search {
                query: "alien".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let route = Route::Search {
            query: "star wars".to_string(),
            page: 2,
        };
        assert_eq!(Route::parse(&route.path()), route);
        let genre = Route::Genre("film noir".to_string());
        assert_eq!(Route::parse(&genre.path()), genre);
    }

    #[test]
    fn test_encoded_characters_survive() {
        let route = Route::Search {
            query: "amélie & co".to_string(),
            page: 1,
        };
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[tokio::test]
    async fn test_preload_ready() {
        let transport = Arc::new(ScriptedTransport::new().reply(
            OmdbRequest::ById {
                imdb_id: "tt0133093".to_string(),
            },
            details_body("tt0133093", "The Matrix"),
        ));
        let gateway = MovieGateway::new(transport);

        match preload_movie(&gateway, Some("tt0133093")).await {
            Preload::Ready(details) => assert_eq!(details.title, "The Matrix"),
            other => panic!("expected details, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_preload_redirects_home() {
        let transport = Arc::new(ScriptedTransport::new().reply(
            OmdbRequest::ById {
                imdb_id: "tt0000000".to_string(),
            },
            not_found_body(),
        ));
        let gateway = MovieGateway::new(transport.clone());

        assert_eq!(preload_movie(&gateway, None).await, Preload::Redirect(Route::Home));
        assert_eq!(transport.call_count(), 0);
        assert_eq!(
            preload_movie(&gateway, Some("tt0000000")).await,
            Preload::Redirect(Route::Home)
        );
        // Unscripted id: transport failure
        assert_eq!(
            preload_movie(&gateway, Some("tt9999999")).await,
            Preload::Redirect(Route::Home)
        );
    }
}
