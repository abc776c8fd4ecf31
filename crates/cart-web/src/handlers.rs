//! # Request Handlers
//!
//! Axum request handlers for the storefront.
//! Page events (add, remove, drawer) mutate the storefront under its write
//! lock and redirect back to the page; the JSON API exposes the same state.

use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use cart_core::{CatalogError, FetchState, ProductId};
use serde::Serialize;
use tracing::{debug, instrument};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(code: u16, error: impl Into<String>) -> ApiError {
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ErrorResponse::new(error, code)),
    )
}

/// The shopper-facing message with the failure kind as details; the
/// underlying error text stays in the logs
fn catalog_error(err: &CatalogError) -> ApiError {
    let code = err.status_code();
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ErrorResponse::new(err.user_message(), code).with_details(err.kind())),
    )
}

/// Ids arrive as raw path text; anything that isn't a product id is a no-op
fn parse_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse().ok()
}

// =============================================================================
// Page
// =============================================================================

/// Render the storefront
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.storefront.read().await;
    Html(views::render(store.view()))
}

/// Grid "Add to cart" and drawer "+"
#[instrument(skip(state))]
pub async fn add_to_cart(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = parse_id(&id) {
        let mut store = state.storefront.write().await;
        if store.add_to_cart(id) {
            debug!("Added product {}, badge={}", id, store.badge_count());
        } else {
            debug!("Ignored add for unavailable product {}", id);
        }
    }
    Redirect::to("/")
}

/// Drawer "-"
#[instrument(skip(state))]
pub async fn remove_from_cart(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = parse_id(&id) {
        let mut store = state.storefront.write().await;
        store.remove_from_cart(id);
        debug!("Removed product {}, badge={}", id, store.badge_count());
    }
    Redirect::to("/")
}

pub async fn open_drawer(State(state): State<AppState>) -> Redirect {
    state.storefront.write().await.open_drawer();
    Redirect::to("/")
}

pub async fn close_drawer(State(state): State<AppState>) -> Redirect {
    state.storefront.write().await.close_drawer();
    Redirect::to("/")
}

// =============================================================================
// JSON API
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.storefront.read().await;
    Json(serde_json::json!({
        "status": "healthy",
        "service": "quick-cart",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": store.status(),
        "catalog_source": state.source.source_name(),
        "catalog_loaded_at": store.loaded_at().map(|t| t.to_rfc3339()),
        "started_at": state.started_at.to_rfc3339(),
    }))
}

/// Get products list
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let store = state.storefront.read().await;
    match store.products() {
        FetchState::Pending => Err(api_error(503, "Catalog is still loading")),
        FetchState::Failure(err) => Err(catalog_error(err)),
        FetchState::Success(catalog) => Ok(Json(serde_json::json!({
            "products": catalog.products,
            "count": catalog.len()
        }))),
    }
}

fn cart_json(state: &cart_core::Storefront) -> serde_json::Value {
    let cart = state.cart();
    serde_json::json!({
        "items": cart,
        "count": cart.total_item_count(),
        "total": cart.total_price(),
    })
}

/// Get the cart with its badge count
pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.storefront.read().await;
    Json(cart_json(&store))
}

/// Add one of a catalog product to the cart
#[instrument(skip(state))]
pub async fn api_add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.storefront.write().await;
    if !store.add_to_cart(id) {
        return Err(api_error(404, format!("Product not found: {}", id)));
    }
    Ok(Json(cart_json(&store)))
}

/// Remove one of a product from the cart
#[instrument(skip(state))]
pub async fn api_remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> impl IntoResponse {
    let mut store = state.storefront.write().await;
    store.remove_from_cart(id);
    Json(cart_json(&store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
        assert!(err.details.is_none());
    }

    #[test]
    fn test_catalog_error_carries_kind() {
        let (status, Json(body)) = catalog_error(&CatalogError::Parse("expected array".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, "Something went wrong...");
        assert_eq!(body.code, 502);
        assert_eq!(body.details.as_deref(), Some("parse"));
    }

    #[test]
    fn test_api_error_status() {
        let (status, _json) = api_error(503, "loading");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(" 5000000000 "), Some(5_000_000_000));
        assert_eq!(parse_id("1.5"), None);
    }
}
