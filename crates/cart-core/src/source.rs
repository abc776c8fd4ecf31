//! # Catalog Source Trait
//!
//! Where the storefront gets its products from. The HTTP fetcher lives in
//! `cart-catalog`; a fixed in-memory source lives here for fixtures and tests.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           CatalogSource (trait)             │
//! │  ├── fetch_products()                       │
//! │  └── source_name()                          │
//! └─────────────────────────────────────────────┘
//!                        ▲
//!             ┌──────────┴──────────┐
//!   ┌─────────┴─────────┐ ┌─────────┴───────────┐
//!   │ HttpCatalogSource │ │ StaticCatalogSource │
//!   │  (cart-catalog)   │ │     (fixtures)      │
//!   └───────────────────┘ └─────────────────────┘
//! ```

use crate::error::{CatalogError, CatalogResult};
use crate::product::Catalog;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// A provider of the product catalog.
///
/// The storefront calls `fetch_products` exactly once per lifetime.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog.
    async fn fetch_products(&self) -> CatalogResult<Catalog>;

    /// Name of the source (for logging).
    fn source_name(&self) -> &'static str;
}

/// Type alias for a shared catalog source (dynamic dispatch)
pub type BoxedCatalogSource = Arc<dyn CatalogSource>;

/// Serves a fixed catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalog: Catalog,
}

impl StaticCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Read a TOML fixture from disk
    pub fn from_toml_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Fixture(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(Catalog::from_toml(&content)?))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> CatalogResult<Catalog> {
        Ok(self.catalog.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
