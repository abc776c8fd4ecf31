//! # Catalog Configuration
//!
//! Where the product feed lives and how long to wait for it.
//! Values come from environment variables (with `.env` support).

use cart_core::CatalogError;
use std::env;
use std::time::Duration;

/// Public demo catalog the storefront talks to by default
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default HTTP timeout for the catalog request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Full URL of the product array endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `CATALOG_URL` (default: fakestoreapi products)
    /// - `CATALOG_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, CatalogError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());

        let timeout_secs = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                CatalogError::Configuration(format!(
                    "CATALOG_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            endpoint,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create config for an explicit endpoint (for testing)
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Builder: set timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the endpoint scheme and timeout
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(CatalogError::Configuration(
                "CATALOG_URL must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(CatalogError::Configuration(
                "CATALOG_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint, "https://fakestoreapi.com/products");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_URL", "http://localhost:9000/products"),
            ("CATALOG_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/products");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let result = CatalogConfig::from_lookup(lookup(&[("CATALOG_URL", "ftp://example.com")]));
        assert!(matches!(result, Err(CatalogError::Configuration(_))));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let result = CatalogConfig::from_lookup(lookup(&[("CATALOG_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());

        let result = CatalogConfig::from_lookup(lookup(&[("CATALOG_TIMEOUT_SECS", "0")]));
        assert!(result.is_err());
    }
}
