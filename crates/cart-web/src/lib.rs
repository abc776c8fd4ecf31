//! # cart-web
//!
//! Server-rendered storefront for quick-cart-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server that owns the storefront state
//! - HTML views: loading spinner, failure message, product grid, cart drawer
//! - A small JSON API over the same catalog and cart
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Storefront page |
//! | POST | `/cart/add/{id}` | Add one of a product |
//! | POST | `/cart/remove/{id}` | Remove one of a product |
//! | POST | `/drawer/open` | Open the cart drawer |
//! | POST | `/drawer/close` | Close the cart drawer |
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | Catalog |
//! | GET | `/api/v1/cart` | Cart and badge count |
//! | POST | `/api/v1/cart/items/{id}` | Add one of a catalog product (404 if unknown) |
//! | DELETE | `/api/v1/cart/items/{id}` | Remove one of a product |

pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
