//! Jikan API client for manga listings and searches.
//!
//! One GET per call. Failures are returned to the caller as-is: there is no
//! retry, rate limiting or caching at this layer.

use super::types::{DataResponse, MangaEntry};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("manga-web/", env!("CARGO_PKG_VERSION"));

/// Errors from a catalog request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Jikan API v4 client
#[derive(Debug, Clone)]
pub struct JikanClient {
    /// HTTP client
    client: Client,
    /// Base URL for Jikan API, without a trailing slash
    base_url: String,
}

impl JikanClient {
    /// Create a new Jikan client
    ///
    /// Without a `timeout` requests wait for as long as the upstream takes.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the unfiltered manga listing
    pub async fn list_manga(&self) -> Result<Vec<MangaEntry>, ApiError> {
        info!("Fetching manga listing");
        self.get_manga(None).await
    }

    /// Search manga by free-text query
    ///
    /// The query is sent as the `q` parameter exactly as given.
    pub async fn search_manga(&self, query: &str) -> Result<Vec<MangaEntry>, ApiError> {
        info!(query = query, "Searching manga");
        self.get_manga(Some(query)).await
    }

    async fn get_manga(&self, query: Option<&str>) -> Result<Vec<MangaEntry>, ApiError> {
        let url = format!("{}/manga", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }

        debug!(url = %url, "Making API request");

        let response = request.send().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        let parsed: DataResponse<MangaEntry> =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                url: url.clone(),
                source,
            })?;

        debug!(url = %url, count = parsed.data.len(), "Request successful");
        Ok(parsed.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = JikanClient::new("https://api.jikan.moe/v4/", None).unwrap();
        assert_eq!(client.base_url(), "https://api.jikan.moe/v4");
    }

    #[tokio::test]
    async fn test_list_manga_sends_no_query() {
        let server = MockServer::start_async().await;
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/manga").query_param_exists("q");
                then.status(500);
            })
            .await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/manga");
                then.status(200)
                    .json_body(json!({ "data": [{ "title": "A" }, { "title": "B" }] }));
            })
            .await;

        let client = JikanClient::new(server.base_url(), None).unwrap();
        let entries = client.list_manga().await.unwrap();

        mock.assert_async().await;
        search_mock.assert_hits_async(0).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), Some("A"));
        assert_eq!(entries[1].title(), Some("B"));
    }

    #[tokio::test]
    async fn test_search_manga_forwards_query_verbatim() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/manga")
                    .query_param("q", "fullmetal&alchemist");
                then.status(200)
                    .json_body(json!({ "data": [{ "title": "Fullmetal Alchemist" }] }));
            })
            .await;

        let client = JikanClient::new(server.base_url(), None).unwrap();
        let entries = client.search_manga("fullmetal&alchemist").await.unwrap();

        mock.assert_async().await;
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/manga");
                then.status(429).body("Too Many Requests");
            })
            .await;

        let client = JikanClient::new(server.base_url(), None).unwrap();
        let err = client.list_manga().await.unwrap_err();

        match err {
            ApiError::Status { status, .. } => assert_eq!(status, StatusCode::TOO_MANY_REQUESTS),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_data_field_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/manga");
                then.status(200).json_body(json!({ "items": [] }));
            })
            .await;

        let client = JikanClient::new(server.base_url(), None).unwrap();
        let err = client.list_manga().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_a_request_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let client = JikanClient::new("http://127.0.0.1:9", None).unwrap();
        let err = client.list_manga().await.unwrap_err();

        assert!(matches!(err, ApiError::Request { .. }));
    }
}
