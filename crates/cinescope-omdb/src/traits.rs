use async_trait::async_trait;
use crate::error::TransportError;

/// One provider operation, before credentials are attached
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OmdbRequest {
    /// Title search, one provider page of up to ten hits
    Search { query: String, page: u32 },
    /// Full-plot lookup by IMDb id
    ById { imdb_id: String },
    /// Full-plot lookup by exact title, optionally narrowed by year
    ByTitle { title: String, year: Option<String> },
}

impl OmdbRequest {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            OmdbRequest::Search { query, page } => vec![
                ("s", query.clone()),
                ("type", "movie".to_string()),
                ("page", page.to_string()),
            ],
            OmdbRequest::ById { imdb_id } => vec![
                ("i", imdb_id.clone()),
                ("plot", "full".to_string()),
            ],
            OmdbRequest::ByTitle { title, year } => {
                let mut params = vec![("t", title.clone()), ("plot", "full".to_string())];
                if let Some(year) = year {
                    params.push(("y", year.clone()));
                }
                params
            }
        }
    }
}

/// Executes provider requests and hands back the raw JSON body
///
/// Implementations own credential injection: every request that reaches
/// the provider goes through `fetch`.
#[async_trait]
pub trait OmdbTransport: Send + Sync {
    async fn fetch(&self, request: &OmdbRequest) -> Result<serde_json::Value, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params() {
        let request = OmdbRequest::Search {
            query: "batman".to_string(),
            page: 3,
        };
        assert_eq!(
            request.query_params(),
            vec![
                ("s", "batman".to_string()),
                ("type", "movie".to_string()),
                ("page", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_by_title_params_include_year_only_when_set() {
        let without_year = OmdbRequest::ByTitle {
            title: "Dune".to_string(),
            year: None,
        };
        assert!(!without_year.query_params().iter().any(|(k, _)| *k == "y"));

        let with_year = OmdbRequest::ByTitle {
            title: "Dune".to_string(),
            year: Some("2021".to_string()),
        };
        assert!(with_year.query_params().contains(&("y", "2021".to_string())));
        assert!(with_year.query_params().contains(&("plot", "full".to_string())));
    }
}
