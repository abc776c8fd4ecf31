//! # Quick-Cart RS
//!
//! Single-page storefront with a slide-out cart.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at another catalog, or serve a local fixture
//! export CATALOG_URL=https://fakestoreapi.com/products
//! export CATALOG_FILE=config/catalog.toml
//!
//! # Run the server
//! quick-cart
//! ```

use cart_web::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Catalog source: {}", state.source.source_name());

    // Start the one catalog fetch; the page shows a spinner until it lands
    state.mount();

    let app = routes::create_router(state);

    info!("Quick-Cart v{} starting on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Storefront: http://{}/", addr);
        info!("Cart API: GET http://{}/api/v1/cart", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
