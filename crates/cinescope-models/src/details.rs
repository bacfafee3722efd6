use serde::{Deserialize, Serialize};
use crate::media::MediaType;

/// Third-party rating attached to a detail record (e.g. Rotten Tomatoes)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderRating {
    pub source: String,
    pub value: String,
}

/// Full detail record for one title
///
/// Fields the provider leaves blank come through as `"N/A"`; they are kept
/// verbatim so the presentation layer decides how to render them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub media_type: MediaType,
    pub poster: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    /// Comma-joined genre list, e.g. "Action, Sci-Fi"
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<ProviderRating>,
    pub metascore: String,
    /// Decimal string, e.g. "8.8"
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub dvd: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
}

/// Outcome of a single-title lookup
///
/// The provider answers unknown ids with a normal response whose status
/// field is "False"; that is `NotFound`, not a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovieLookup {
    Found(MovieDetails),
    NotFound(String),
}

impl MovieLookup {
    pub fn into_found(self) -> Option<MovieDetails> {
        match self {
            MovieLookup::Found(details) => Some(details),
            MovieLookup::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MovieLookup::Found(_))
    }
}
