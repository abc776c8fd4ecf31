//! # Catalog Error Types
//!
//! Typed error handling for the quick-cart catalog fetch.
//! Cart operations are total and never fail; only loading the catalog can,
//! along with rebuilding a cart from untrusted serialized entries.

use crate::product::ProductId;
use thiserror::Error;

/// The message shown in place of the whole storefront when the catalog fails to load
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong...";

/// Core error type for catalog loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Configuration errors (bad endpoint, invalid timeout)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/HTTP transport error talking to the catalog endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// Catalog endpoint answered with a non-success status
    #[error("Catalog endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a product array
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local fixture catalog could not be read or parsed
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl CatalogError {
    /// Text shown to the shopper; identical for every kind
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// Short machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Configuration(_) => "configuration",
            CatalogError::Network(_) => "network",
            CatalogError::Status { .. } => "status",
            CatalogError::Parse(_) => "parse",
            CatalogError::Fixture(_) => "fixture",
        }
    }

    /// HTTP status the storefront API answers with while this error is current
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Configuration(_) | CatalogError::Fixture(_) => 500,
            CatalogError::Network(_) | CatalogError::Status { .. } | CatalogError::Parse(_) => 502,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Fixture(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// A list of cart entries that cannot form a cart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Cart entry for product {id} has amount 0")]
    ZeroAmount { id: ProductId },

    #[error("Cart holds product {id} more than once")]
    DuplicateItem { id: ProductId },
}
