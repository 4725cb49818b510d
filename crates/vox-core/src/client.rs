//! HTTP client for the VOX Cinemas website
//!
//! A thin wrapper around `reqwest` that issues sequential GET requests
//! against a configurable base URL and fails loudly on non-success
//! status codes. There is no caching and no retry policy; a failed
//! request surfaces immediately as an error.

use std::time::Duration;

use crate::error::Result;

/// Base URL of the production VOX Cinemas site
pub const DEFAULT_BASE_URL: &str = "https://ksa.voxcinemas.com";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the VOX HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against. Points at the production
    /// site by default; tests point it at a local mock server.
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for fetching VOX Cinemas pages
pub struct VoxClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL prepended to every request path
    base_url: String,
}

impl VoxClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the markup of a page by site-relative path.
    ///
    /// # Arguments
    /// * `path` - Relative path on the site (e.g., "/movies/whatson")
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// Returns `VoxError::Http` on network failure or any non-2xx
    /// status code.
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
