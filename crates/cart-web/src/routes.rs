//! # Routes
//!
//! Axum router configuration for the storefront.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Page:
///   - GET  / - Storefront (spinner, failure message, or grid + drawer)
///   - POST /cart/add/{id} - Add one of a product
///   - POST /cart/remove/{id} - Remove one of a product
///   - POST /drawer/open, /drawer/close - Toggle the cart drawer
///
/// - API:
///   - GET    /api/v1/products - Catalog (503 while loading)
///   - GET    /api/v1/cart - Cart items, badge count, total
///   - POST   /api/v1/cart/items/{id} - Add one of a product
///   - DELETE /api/v1/cart/items/{id} - Remove one of a product
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let page_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/cart/add/{id}", post(handlers::add_to_cart))
        .route("/cart/remove/{id}", post(handlers::remove_from_cart))
        .route("/drawer/open", post(handlers::open_drawer))
        .route("/drawer/close", post(handlers::close_drawer));

    let api_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/cart", get(handlers::get_cart))
        .route(
            "/cart/items/{id}",
            post(handlers::api_add_to_cart).delete(handlers::api_remove_from_cart),
        )
        .layer(cors);

    Router::new()
        .merge(page_routes)
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
