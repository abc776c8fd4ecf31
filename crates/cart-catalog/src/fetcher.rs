//! # HTTP Catalog Fetcher
//!
//! One GET against the catalog endpoint, parsed into a [`Catalog`].
//! No retry, no caching: the storefront calls this once per lifetime.

use crate::config::CatalogConfig;
use async_trait::async_trait;
use cart_core::{Catalog, CatalogError, CatalogResult, CatalogSource};
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// Catalog source backed by a remote JSON endpoint
pub struct HttpCatalogSource {
    config: CatalogConfig,
    client: Client,
}

impl HttpCatalogSource {
    /// Create a new fetcher for `config`
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                CatalogError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CatalogResult<Self> {
        let config = CatalogConfig::from_env()?;
        Self::new(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn fetch_products(&self) -> CatalogResult<Catalog> {
        debug!("Fetching product catalog");

        let response = self
            .client
            .get(&self.config.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Catalog endpoint error: status={}, body={}", status, body);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let catalog = Catalog::from_json(&body).map_err(|e| {
            error!("Failed to parse catalog: {}", e);
            e
        })?;

        info!("Fetched {} products", catalog.len());

        Ok(catalog)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
