use serde::{Deserialize, Serialize};

/// Kind of record reported by the provider for a search hit or detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Movie,
    Series,
    Episode,
    Game,
    #[serde(other)]
    Other,
}

impl MediaType {
    /// Parse the provider's `Type` field; anything unrecognised maps to `Other`
    pub fn from_provider(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            "game" => MediaType::Game,
            _ => MediaType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
            MediaType::Game => "game",
            MediaType::Other => "other",
        }
    }
}

/// A single hit from a title search or category query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub media_type: MediaType,
    pub poster: String,
}

/// One provider page of search hits
///
/// A provider-reported "no results" is represented as an empty `results`
/// list with `total_results == 0` and the provider's message in `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn empty(error: Option<String>) -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            error,
        }
    }

    /// True when the provider reported at least one hit
    pub fn is_found(&self) -> bool {
        self.error.is_none()
    }
}

/// An application-level page assembled from two provider pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MergedPage {
    pub results: Vec<SearchResult>,
    pub total_results: u32,
    pub total_pages: u32,
    /// Approximate: true when the merged page came back full. The provider
    /// never reports how many hits remain after a merged page, so this can
    /// both under- and over-report.
    pub has_more: bool,
}
