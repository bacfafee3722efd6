use serde::{Deserialize, Serialize};
use crate::details::MovieDetails;

/// A saved movie, as persisted in the watchlist blob
///
/// Keyed by `imdb_id`; the optional fields are a snapshot taken from the
/// detail page at the time the movie was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistEntry {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl From<&MovieDetails> for WatchlistEntry {
    fn from(details: &MovieDetails) -> Self {
        Self {
            imdb_id: details.imdb_id.clone(),
            title: details.title.clone(),
            year: details.year.clone(),
            poster: details.poster.clone(),
            rating: Some(details.imdb_rating.clone()),
            genre: Some(details.genre.clone()),
            runtime: Some(details.runtime.clone()),
        }
    }
}
