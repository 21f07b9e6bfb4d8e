//! FASHN HTTP Client
//!
//! A small, type-safe client for the FASHN virtual try-on API.
//!
//! Jobs are asynchronous on the remote side: a submission returns an
//! identifier, and the result is fetched by polling a status endpoint until
//! the job completes, fails, or the caller's deadline runs out.
//!
//! # Example
//!
//! ```no_run
//! use fashn_client::{FashnClient, PollPolicy};
//! use fashn_core::TryOnParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FashnClient::new("https://api.fashn.ai", "fa-...");
//!
//!     let params = TryOnParams::new(
//!         "https://example.com/model.jpg",
//!         "https://example.com/garment.jpg",
//!     );
//!     let output = client
//!         .run(&params.to_request()?, &PollPolicy::default())
//!         .await?;
//!
//!     println!("Job {} finished: {}", output.id, output.output);
//!     Ok(())
//! }
//! ```

mod account;
pub mod api;
pub mod batch;
pub mod error;
mod jobs;
pub mod poll;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::JobApi;
pub use batch::{ErrorMode, ItemOutcome, ItemResult, run_batch};
pub use error::{ClientError, Result};
pub use fashn_core::{JobHandle, JobOutput, JobRequest, JobStatus};
pub use poll::{PollPolicy, await_completion, run_job};

use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;

/// Default API domain
pub const DEFAULT_BASE_URL: &str = "https://api.fashn.ai";

/// HTTP client for the FASHN API
///
/// Holds the base URL and API key it was created with and nothing else, so
/// a single instance can drive any number of independent jobs.
#[derive(Clone)]
pub struct FashnClient {
    /// Base URL of the API (e.g., "https://api.fashn.ai")
    base_url: String,
    /// Key sent as a bearer token on every request
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for FashnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FashnClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FashnClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://api.fashn.ai")
    /// * `api_key` - The API key, sent as `Authorization: Bearer <key>`
    ///
    /// # Example
    /// ```
    /// use fashn_client::FashnClient;
    ///
    /// let client = FashnClient::new("https://api.fashn.ai", "fa-...");
    /// ```
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use fashn_client::FashnClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = FashnClient::with_client("https://api.fashn.ai", "fa-...", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the credential and JSON accept header
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Fail on non-success status codes and return the raw body otherwise
    async fn read_body(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let body = self.read_body(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse JSON response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FashnClient::new("https://api.fashn.ai", "key");
        assert_eq!(client.base_url(), "https://api.fashn.ai");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = FashnClient::new("https://api.fashn.ai/", "key");
        assert_eq!(client.base_url(), "https://api.fashn.ai");
        assert_eq!(client.url("/v1/run"), "https://api.fashn.ai/v1/run");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = FashnClient::with_client("http://localhost:8080", "key", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = FashnClient::new(DEFAULT_BASE_URL, "fa-secret");
        let printed = format!("{:?}", client);
        assert!(!printed.contains("fa-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
