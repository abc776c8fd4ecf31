//! # cart-catalog
//!
//! Remote product catalog fetcher for quick-cart-rs.
//!
//! Implements `cart_core::CatalogSource` over a JSON endpoint returning an
//! array of `{id, category, description, image, price, title}` objects.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_catalog::HttpCatalogSource;
//! use cart_core::CatalogSource;
//!
//! // CATALOG_URL / CATALOG_TIMEOUT_SECS, or the fakestoreapi default
//! let source = HttpCatalogSource::from_env()?;
//!
//! match source.fetch_products().await {
//!     Ok(catalog) => println!("{} products", catalog.len()),
//!     Err(e) => println!("{}", e.user_message()),
//! }
//! ```

pub mod config;
pub mod fetcher;

// Re-exports
pub use config::{CatalogConfig, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT_SECS};
pub use fetcher::HttpCatalogSource;
