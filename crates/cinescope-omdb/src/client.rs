use crate::error::TransportError;
use crate::traits::{OmdbRequest, OmdbTransport};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

pub fn create_omdb_client() -> Client {
    Client::builder()
        .user_agent(concat!("cinescope/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// HTTP transport for the OMDb endpoint
#[derive(Clone)]
pub struct OmdbClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Arc::new(create_omdb_client()),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl OmdbTransport for OmdbClient {
    async fn fetch(&self, request: &OmdbRequest) -> Result<serde_json::Value, TransportError> {
        let params = request.query_params();
        debug!("OMDb request: {:?}", params);

        // The API key is attached here and nowhere else
        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .query(&[("apikey", self.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response.json().await?;
        Ok(json)
    }
}
