use anyhow::Context;
use std::env;

/// Configuration for the external product catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_API_BASE_URL: Base URL of the product API (required)
    /// - CATALOG_API_KEY: Bearer token sent with every request (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("CATALOG_API_BASE_URL").context("CATALOG_API_BASE_URL must be set")?;
        let api_key = env::var("CATALOG_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self { base_url, api_key })
    }
}
