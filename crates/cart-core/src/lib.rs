//! # cart-core
//!
//! Core types for the quick-cart storefront.
//!
//! This crate provides:
//! - `Product` and `Catalog` for the read-only product list
//! - `Cart` and `CartItem` for client-side cart state
//! - `FetchState` for the one-shot catalog load
//! - `CatalogSource` trait for pluggable catalog providers
//! - `Storefront` for the root coordinator's state
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_core::{Catalog, Product, Storefront};
//!
//! let mut store = Storefront::new();
//! store.resolve(source.fetch_products().await);
//!
//! store.add_to_cart(1);
//! store.add_to_cart(1);
//! store.remove_from_cart(1);
//!
//! assert_eq!(store.badge_count(), 1);
//! ```

pub mod cart;
pub mod error;
pub mod fetch;
pub mod product;
pub mod source;
pub mod storefront;

// Re-exports for convenience
pub use cart::{total_item_count, Cart, CartItem};
pub use error::{CartError, CatalogError, CatalogResult, GENERIC_FAILURE_MESSAGE};
pub use fetch::{FetchState, FetchStatus};
pub use product::{format_price, Catalog, Product, ProductId};
pub use source::{BoxedCatalogSource, CatalogSource, StaticCatalogSource};
pub use storefront::{Storefront, StorefrontView};
