//! HTTP client adapter for upstream catalog requests
//!
//! Thin wrapper over [`reqwest::Client`] that applies the configured
//! timeout and user agent once, at construction, and converts transport
//! and status failures into the crate's error taxonomy with the request
//! URL attached for diagnostics.

use crate::config::FetchConfig;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client for all catalog fetchers
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client from the fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET a URL and return the response body as text
    ///
    /// A non-success status is an error here rather than a parse concern:
    /// catalog "no result" responses come back as 200 with marker text,
    /// so anything else indicates a transport or service problem.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        response.text().await.map_err(|e| Error::http(url, e))
    }

    /// GET a URL and deserialize the JSON response body
    ///
    /// The JSON-API accept header is required by the Zooniverse endpoints
    /// (subject metadata in particular) and harmless elsewhere.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("accept", "application/vnd.api+json; version=1")
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| Error::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(url, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| Error::http(url, e))?;
        serde_json::from_str(&body).map_err(|e| Error::json(url.to_string(), e))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(url, status.as_u16()));
        }

        Ok(response)
    }
}
