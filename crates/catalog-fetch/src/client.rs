//! HTTP client for the catalog API.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info};

use catalog_model::{ProductRecord, parse_records};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("catalog-qa/", env!("CARGO_PKG_VERSION"));

/// Blocking client for a product catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::blocking::Client,
    config: FetchConfig,
}

impl CatalogClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Fetches every product from the endpoint.
    pub fn fetch_products(&self) -> Result<Vec<ProductRecord>> {
        debug!(url = %self.config.url, "fetching products");

        let response = self.client.get(&self.config.url).send()?;
        let products = Self::handle_response(response)?;

        info!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Checks the status and parses the body as a product list.
    fn handle_response(response: reqwest::blocking::Response) -> Result<Vec<ProductRecord>> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        Ok(parse_records(&body)?)
    }
}

/// Fetch products with a one-off client.
pub fn fetch_products(config: &FetchConfig) -> Result<Vec<ProductRecord>> {
    CatalogClient::new(config.clone())?.fetch_products()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new(FetchConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_names_crate_version() {
        assert!(USER_AGENT_VALUE.starts_with("catalog-qa/"));
    }
}
