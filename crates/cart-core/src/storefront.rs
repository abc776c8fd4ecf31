//! # Storefront State
//!
//! The root coordinator's state: the one-shot catalog fetch, the cart, and
//! whether the drawer is open. Views read it through [`Storefront::view`];
//! UI events go through the mutating methods.

use crate::cart::Cart;
use crate::error::{CatalogError, CatalogResult};
use crate::fetch::{FetchState, FetchStatus};
use crate::product::{Catalog, ProductId};
use chrono::{DateTime, Utc};

/// What the page should show right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorefrontView<'a> {
    /// Catalog still loading: spinner only
    Loading,
    /// Catalog failed: generic message replaces everything
    Failed(&'a CatalogError),
    /// Catalog loaded: grid, badge, and (maybe) drawer
    Ready {
        catalog: &'a Catalog,
        cart: &'a Cart,
        drawer_open: bool,
        badge: u32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Storefront {
    products: FetchState<Catalog>,
    cart: Cart,
    drawer_open: bool,
    loaded_at: Option<DateTime<Utc>>,
}

impl Storefront {
    /// A freshly mounted storefront: catalog pending, empty cart, drawer closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of the catalog fetch.
    ///
    /// Only the first resolution counts; returns false if the fetch had
    /// already resolved.
    pub fn resolve(&mut self, result: CatalogResult<Catalog>) -> bool {
        if !self.products.is_pending() {
            return false;
        }
        self.products = FetchState::from_result(result);
        self.loaded_at = Some(Utc::now());
        true
    }

    /// Add one of catalog product `id`. Returns false if the catalog is not
    /// loaded or has no such product.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.products.data().and_then(|c| c.get(id)) else {
            return false;
        };
        self.cart = self.cart.add_to_cart(product);
        true
    }

    /// Remove one of `id` from the cart
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = self.cart.remove_from_cart(id);
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn badge_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn products(&self) -> &FetchState<Catalog> {
        &self.products
    }

    pub fn status(&self) -> FetchStatus {
        self.products.status()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// When the catalog fetch resolved (success or failure)
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn view(&self) -> StorefrontView<'_> {
        match &self.products {
            FetchState::Pending => StorefrontView::Loading,
            FetchState::Failure(err) => StorefrontView::Failed(err),
            FetchState::Success(catalog) => StorefrontView::Ready {
                catalog,
                cart: &self.cart,
                drawer_open: self.drawer_open,
                badge: self.badge_count(),
            },
        }
    }
}
