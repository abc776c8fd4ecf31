//! # cart-wasm
//!
//! WebAssembly bindings for quick-cart-rs.
//!
//! This crate provides WASM-compatible functions for:
//! - Fetching and parsing the product catalog in the browser
//! - Holding cart state client-side with the same add/remove rules as the server
//! - Price formatting
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCart, fetch_catalog } from 'quick-cart-wasm';
//!
//! await init();
//!
//! const products = await fetch_catalog('https://fakestoreapi.com/products');
//! const cart = new WasmCart();
//! cart.add_to_cart(products[0]);
//! cart.remove_from_cart(BigInt(products[0].id)); // ids are i64, passed as BigInt
//!
//! console.log('Badge:', cart.total_item_count());
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use cart_core::{format_price as format_dollars, Cart, Catalog, Product, ProductId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Client-side cart
#[derive(Debug, Clone, Default)]
#[wasm_bindgen]
pub struct WasmCart {
    cart: Cart,
}

#[wasm_bindgen]
impl WasmCart {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of a catalog product (`{id, title, price, ...}`)
    #[wasm_bindgen]
    pub fn add_to_cart(&mut self, product: JsValue) -> Result<(), JsValue> {
        let product: Product = serde_wasm_bindgen::from_value(product)
            .map_err(|e| js_error(format!("Invalid product: {}", e)))?;
        self.add_product(&product);
        Ok(())
    }

    /// Remove one of `id`; drops the entry at amount 1
    #[wasm_bindgen]
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = self.cart.remove_from_cart(id);
    }

    /// Badge count
    #[wasm_bindgen]
    pub fn total_item_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    #[wasm_bindgen]
    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    #[wasm_bindgen]
    pub fn format_total(&self) -> String {
        self.cart.display_total()
    }

    /// Amount of `id` in the cart (0 if absent)
    #[wasm_bindgen]
    pub fn amount(&self, id: ProductId) -> u32 {
        self.cart.get(id).map(|item| item.amount).unwrap_or(0)
    }

    /// Entries as `{id, category, description, image, price, title, amount}`
    #[wasm_bindgen]
    pub fn items(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.cart).map_err(Into::into)
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

impl WasmCart {
    /// Add one of `product`
    pub fn add_product(&mut self, product: &Product) {
        self.cart = self.cart.add_to_cart(product);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

/// Parse a catalog feed body into an array of products
#[wasm_bindgen]
pub fn parse_catalog(json: &str) -> Result<JsValue, JsValue> {
    let catalog = Catalog::from_json(json).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&catalog.products).map_err(Into::into)
}

/// Fetch the catalog from `url` with the browser's fetch API
#[wasm_bindgen]
pub async fn fetch_catalog(url: String) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("No window available"))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(&url))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(js_error(format!("Catalog endpoint returned HTTP {}", response.status())));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| js_error("Catalog body was not text"))?;

    parse_catalog(&body)
}

/// Format a dollar amount for display
#[wasm_bindgen]
pub fn format_price(price: f64) -> String {
    format_dollars(price)
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_remove() {
        let shirt = Product::new(2, "T-Shirt", 22.3);
        let mut cart = WasmCart::new();

        cart.add_product(&shirt);
        cart.add_product(&shirt);
        assert_eq!(cart.amount(2), 2);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.format_total(), "$44.60");

        cart.remove_from_cart(2);
        cart.remove_from_cart(2);
        assert_eq!(cart.amount(2), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = WasmCart::new();
        cart.add_product(&Product::new(1, "Backpack", 109.95));

        let before = cart.cart().clone();
        cart.remove_from_cart(42);
        assert_eq!(cart.cart(), &before);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(19.99), "$19.99");
        assert_eq!(format_price(1.0), "$1.00");
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
