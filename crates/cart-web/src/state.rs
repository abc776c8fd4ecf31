//! # Application State
//!
//! Shared state for the Axum application.
//! Owns the storefront (catalog fetch, cart, drawer) and the catalog source.

use cart_catalog::HttpCatalogSource;
use cart_core::{BoxedCatalogSource, StaticCatalogSource, Storefront};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Serve this TOML fixture instead of the remote catalog
    pub catalog_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            catalog_file: std::env::var("CATALOG_FILE").ok().map(PathBuf::from),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
            catalog_file: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog fetch, cart, and drawer, mutated one event at a time
    pub storefront: Arc<RwLock<Storefront>>,
    /// Where the catalog comes from
    pub source: BoxedCatalogSource,
    /// Application config
    pub config: AppConfig,
    /// Process start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state from the environment: a fixture catalog if
    /// `CATALOG_FILE` is set, the remote catalog otherwise
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let source: BoxedCatalogSource = match &config.catalog_file {
            Some(path) => {
                info!("Using catalog fixture {}", path.display());
                Arc::new(
                    StaticCatalogSource::from_toml_file(path)
                        .map_err(|e| anyhow::anyhow!("Failed to load catalog fixture: {}", e))?,
                )
            }
            None => Arc::new(
                HttpCatalogSource::from_env()
                    .map_err(|e| anyhow::anyhow!("Failed to configure catalog fetcher: {}", e))?,
            ),
        };

        Ok(Self::with_source(config, source))
    }

    /// Create state around an explicit catalog source
    pub fn with_source(config: AppConfig, source: BoxedCatalogSource) -> Self {
        Self {
            storefront: Arc::new(RwLock::new(Storefront::new())),
            source,
            config,
            started_at: Utc::now(),
        }
    }

    /// Kick off the single catalog fetch in the background.
    ///
    /// The storefront shows its loading view until the task resolves it.
    pub fn mount(&self) -> JoinHandle<()> {
        let source = self.source.clone();
        let storefront = self.storefront.clone();

        tokio::spawn(async move {
            info!("Fetching catalog from {} source", source.source_name());
            let result = source.fetch_products().await;

            match &result {
                Ok(catalog) => info!("Catalog ready: {} products", catalog.len()),
                Err(e) => error!("Catalog fetch failed: {}", e),
            }

            storefront.write().await.resolve(result);
        })
    }
}
