use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the product catalog API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Builds the authorization header value, when an API key is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Returns the product search endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}
