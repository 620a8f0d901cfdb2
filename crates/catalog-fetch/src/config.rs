//! Configuration types for catalog retrieval.

use std::time::Duration;

/// Products endpoint of the Fake Store API.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to fetch the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Endpoint returning a JSON array of products.
    pub url: String,
    /// Timeout for the whole request, including reading the body.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PRODUCTS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Set the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
