//! Rainforest HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Result, RfError};

/// Rainforest API client
pub struct RfClient {
    client: Client,
    base_url: String,
}

impl RfClient {
    /// Create a new client rooted at `base_url` (e.g. `https://app.rainforestqa.com/api/1`)
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("rfctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for API requests, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for a path relative to the API root
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(RfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| RfError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// Fetch and decode a single API document
    ///
    /// # Arguments
    /// * `path` - Path relative to the API root, may carry a query string
    ///   (e.g. "folders.json?page_size=100")
    /// * `error_context` - Human-readable label for error messages (e.g. "folders")
    pub async fn fetch<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, error_context).await
    }
}
