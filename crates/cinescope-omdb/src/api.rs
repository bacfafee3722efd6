use cinescope_models::{MediaType, MovieDetails, MovieLookup, ProviderRating, SearchResponse, SearchResult};
use serde::Deserialize;
use tracing::debug;
use crate::error::TransportError;
use crate::traits::{OmdbRequest, OmdbTransport};

/// Hits per provider search page
pub const PROVIDER_PAGE_SIZE: usize = 10;

const DEFAULT_NOT_FOUND: &str = "Movie not found!";

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type", default)]
    item_type: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source", default)]
    source: String,
    #[serde(rename = "Value", default)]
    value: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OmdbDetails {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Rated")]
    rated: String,
    #[serde(rename = "Released")]
    released: String,
    #[serde(rename = "Runtime")]
    runtime: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Director")]
    director: String,
    #[serde(rename = "Writer")]
    writer: String,
    #[serde(rename = "Actors")]
    actors: String,
    #[serde(rename = "Plot")]
    plot: String,
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Awards")]
    awards: String,
    #[serde(rename = "Poster")]
    poster: String,
    #[serde(rename = "Ratings")]
    ratings: Vec<OmdbRating>,
    #[serde(rename = "Metascore")]
    metascore: String,
    #[serde(rename = "imdbRating")]
    imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    imdb_votes: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type")]
    item_type: String,
    #[serde(rename = "DVD")]
    dvd: String,
    #[serde(rename = "BoxOffice")]
    box_office: String,
    #[serde(rename = "Production")]
    production: String,
    #[serde(rename = "Website")]
    website: String,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

impl From<OmdbSearchItem> for SearchResult {
    fn from(item: OmdbSearchItem) -> Self {
        Self {
            imdb_id: item.imdb_id,
            title: item.title,
            year: item.year,
            media_type: MediaType::from_provider(&item.item_type),
            poster: item.poster,
        }
    }
}

impl From<OmdbDetails> for MovieDetails {
    fn from(d: OmdbDetails) -> Self {
        Self {
            imdb_id: d.imdb_id,
            title: d.title,
            year: d.year,
            media_type: MediaType::from_provider(&d.item_type),
            poster: d.poster,
            rated: d.rated,
            released: d.released,
            runtime: d.runtime,
            genre: d.genre,
            director: d.director,
            writer: d.writer,
            actors: d.actors,
            plot: d.plot,
            language: d.language,
            country: d.country,
            awards: d.awards,
            ratings: d
                .ratings
                .into_iter()
                .map(|r| ProviderRating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            metascore: d.metascore,
            imdb_rating: d.imdb_rating,
            imdb_votes: d.imdb_votes,
            dvd: d.dvd,
            box_office: d.box_office,
            production: d.production,
            website: d.website,
        }
    }
}

/// Decode a search body; a "False" status becomes an empty response
pub fn parse_search_response(json: serde_json::Value) -> Result<SearchResponse, TransportError> {
    let raw: OmdbSearchResponse = serde_json::from_value(json)?;

    if !is_success(&raw.response) {
        let message = raw.error.unwrap_or_else(|| DEFAULT_NOT_FOUND.to_string());
        debug!("OMDb search returned no results: {}", message);
        return Ok(SearchResponse::empty(Some(message)));
    }

    let total_results = raw
        .total_results
        .as_deref()
        .and_then(|t| t.trim().parse::<u32>().ok())
        .unwrap_or(raw.search.len() as u32);

    Ok(SearchResponse {
        results: raw.search.into_iter().map(SearchResult::from).collect(),
        total_results,
        error: None,
    })
}

/// Decode a detail body; a "False" status becomes `NotFound`
pub fn parse_details_response(json: serde_json::Value) -> Result<MovieLookup, TransportError> {
    let raw: OmdbDetails = serde_json::from_value(json)?;

    if !is_success(&raw.response) {
        let message = raw.error.clone().unwrap_or_else(|| DEFAULT_NOT_FOUND.to_string());
        return Ok(MovieLookup::NotFound(message));
    }
    if raw.imdb_id.is_empty() {
        return Err(TransportError::Decode("detail response is missing imdbID".to_string()));
    }

    Ok(MovieLookup::Found(MovieDetails::from(raw)))
}

/// Fetch one provider page of title-search hits
pub async fn search(
    transport: &dyn OmdbTransport,
    query: &str,
    page: u32,
) -> Result<SearchResponse, TransportError> {
    let request = OmdbRequest::Search {
        query: query.to_string(),
        page,
    };
    let json = transport.fetch(&request).await?;
    parse_search_response(json)
}

/// Fetch a full-plot detail record by IMDb id
pub async fn movie_by_id(
    transport: &dyn OmdbTransport,
    imdb_id: &str,
) -> Result<MovieLookup, TransportError> {
    let request = OmdbRequest::ById {
        imdb_id: imdb_id.to_string(),
    };
    let json = transport.fetch(&request).await?;
    parse_details_response(json)
}

/// Fetch a full-plot detail record by exact title
pub async fn movie_by_title(
    transport: &dyn OmdbTransport,
    title: &str,
    year: Option<&str>,
) -> Result<MovieLookup, TransportError> {
    let request = OmdbRequest::ByTitle {
        title: title.to_string(),
        year: year.map(str::to_string),
    };
    let json = transport.fetch(&request).await?;
    parse_details_response(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct FixedTransport {
        body: serde_json::Value,
        seen: Mutex<Vec<OmdbRequest>>,
    }

    impl FixedTransport {
        fn new(body: serde_json::Value) -> Self {
            Self {
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OmdbTransport for FixedTransport {
        async fn fetch(&self, request: &OmdbRequest) -> Result<serde_json::Value, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.body.clone())
        }
    }

    #[test]
    fn test_parse_search_success() {
        let body = json!({
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "a.jpg"},
                {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "587",
            "Response": "True"
        });

        let response = parse_search_response(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.total_results, 587);
        assert_eq!(response.results[0].imdb_id, "tt0372784");
        assert_eq!(response.results[0].media_type, MediaType::Movie);
        assert!(response.is_found());
    }

    #[test]
    fn test_parse_search_not_found_is_empty() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});

        let response = parse_search_response(body).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
        assert_eq!(response.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn test_parse_search_malformed() {
        let body = json!({"Search": "not a list", "Response": "True"});
        assert!(matches!(parse_search_response(body), Err(TransportError::Decode(_))));
    }

    #[test]
    fn test_parse_details() {
        let body = json!({
            "Title": "The Matrix", "Year": "1999", "Runtime": "136 min",
            "Genre": "Action, Sci-Fi", "imdbRating": "8.7", "imdbVotes": "2,000,000",
            "imdbID": "tt0133093", "Type": "movie",
            "Ratings": [{"Source": "Rotten Tomatoes", "Value": "83%"}],
            "Response": "True"
        });

        let details = parse_details_response(body).unwrap().into_found().unwrap();
        assert_eq!(details.title, "The Matrix");
        assert_eq!(details.imdb_rating, "8.7");
        assert_eq!(details.ratings[0].source, "Rotten Tomatoes");
        assert_eq!(details.plot, "");
    }

    #[test]
    fn test_parse_details_not_found() {
        let body = json!({"Response": "False", "Error": "Incorrect IMDb ID."});
        assert_eq!(
            parse_details_response(body).unwrap(),
            MovieLookup::NotFound("Incorrect IMDb ID.".to_string())
        );
    }

    #[tokio::test]
    async fn test_movie_by_title_sends_title_request() {
        let transport = FixedTransport::new(json!({"Response": "False", "Error": "Movie not found!"}));

        let lookup = movie_by_title(&transport, "Heat", Some("1995")).await.unwrap();
        assert!(!lookup.is_found());

        let seen = transport.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            OmdbRequest::ByTitle {
                title: "Heat".to_string(),
                year: Some("1995".to_string()),
            }
        );
    }
}
