//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Status mapping: 200 success, 404 not found, anything else unexpected
//! - JSON decoding into typed pages
//!
//! Requests are never retried.

use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::trace;

/// Default timeout for HTTP requests (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("sd-step/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client, timeout })
    }

    /// Create a new HTTP client with a custom timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Perform a GET request and map the status code
    pub async fn get(&self, url: &str, package: &str) -> Result<reqwest::Response, RegistryError> {
        trace!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::transport(package, e))?;

        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => Err(RegistryError::package_not_found(package)),
            status => Err(RegistryError::unexpected_status(package, status.as_u16())),
        }
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get(url, package).await?;

        let body = response
            .text()
            .await
            .map_err(|e| RegistryError::transport(package, e))?;

        serde_json::from_str(&body)
            .map_err(|e| RegistryError::decode(package, format!("failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        ok: bool,
    }

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0").unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(10));
        assert!(DEFAULT_USER_AGENT.starts_with("sd-step/"));
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/probe")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let probe: Probe = client
            .get_json(&format!("{}/probe", server.url()), "probe")
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(probe.ok);
    }

    #[tokio::test]
    async fn test_get_maps_404_to_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let result = client
            .get(&format!("{}/missing", server.url()), "missing")
            .await;

        assert!(matches!(result, Err(RegistryError::PackageNotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_maps_other_status_to_unexpected() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/broken")
            .with_status(503)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let result = client.get(&format!("{}/broken", server.url()), "broken").await;

        assert!(matches!(
            result,
            Err(RegistryError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_json_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/garbage")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let result: Result<Probe, _> = client
            .get_json(&format!("{}/garbage", server.url()), "garbage")
            .await;

        assert!(matches!(result, Err(RegistryError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_get_transport_error() {
        // Nothing listens on port 1
        let client = HttpClient::with_timeout(Duration::from_secs(2)).unwrap();
        let result = client.get("http://127.0.0.1:1/pkgs/core/git", "core/git").await;

        assert!(matches!(result, Err(RegistryError::Transport { .. })));
    }
}
