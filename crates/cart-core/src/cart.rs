//! # Cart State
//!
//! Client-side cart for the storefront.
//!
//! Every operation takes the current cart by reference and returns the next
//! one; the caller replaces its copy. Nothing here can fail: unknown ids are
//! no-ops.
//!
//! ```text
//!  Grid "Add to cart" ──► add_to_cart(product) ──► amount + 1 / push (amount = 1)
//!  Drawer "+"         ──► add_to_cart(product) ──► amount + 1
//!  Drawer "-"         ──► remove_from_cart(id) ──► amount - 1 / drop at 1
//!  Badge              ──► total_item_count()   ──► Σ amount
//! ```

use crate::error::CartError;
use crate::product::{format_price, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A product augmented with a cart quantity.
///
/// Serializes flat: the product fields plus `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Quantity in cart, always >= 1
    pub amount: u32,
}

impl CartItem {
    /// First add of a product
    pub fn from_product(product: &Product) -> Self {
        Self {
            product: product.clone(),
            amount: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times amount
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }

    pub fn display_line_total(&self) -> String {
        format_price(self.line_total())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one item per product id
/// - Every item has `amount >= 1`
/// - Items keep the order in which they were first added
///
/// Serializes as a bare array of items. Deserializing checks the first two
/// invariants and fails on a zero amount or a repeated id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the cart with one more of `product`.
    ///
    /// An existing entry keeps its stored fields and gains one unit; a new
    /// product is appended with amount 1.
    pub fn add_to_cart(&self, product: &Product) -> Cart {
        if self.get(product.id).is_some() {
            let items = self
                .items
                .iter()
                .map(|item| {
                    if item.id() == product.id {
                        CartItem {
                            amount: item.amount.saturating_add(1),
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect();
            return Cart { items };
        }

        let mut items = self.items.clone();
        items.push(CartItem::from_product(product));
        Cart { items }
    }

    /// Returns the cart with one less of `id`.
    ///
    /// An entry at amount 1 is dropped. Unknown ids return an equal cart.
    pub fn remove_from_cart(&self, id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id() != id {
                    return Some(item.clone());
                }
                if item.amount <= 1 {
                    return None;
                }
                Some(CartItem {
                    amount: item.amount - 1,
                    ..item.clone()
                })
            })
            .collect();
        Cart { items }
    }

    /// Badge count: sum of all amounts
    pub fn total_item_count(&self) -> u32 {
        total_item_count(&self.items)
    }

    /// Sum of every line total
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn display_total(&self) -> String {
        format_price(self.total_price())
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount == 0 {
                return Err(CartError::ZeroAmount { id: item.id() });
            }
            if !seen.insert(item.id()) {
                return Err(CartError::DuplicateItem { id: item.id() });
            }
        }
        Ok(Cart { items })
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// Sum of `amount` over `items`
pub fn total_item_count(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |acc, item| acc.saturating_add(item.amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, price: f64) -> Product {
        Product::new(id, format!("Product {}", id), price)
    }

    fn cart_with(entries: &[(ProductId, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, amount) in entries {
            let p = product(id, 10.0);
            for _ in 0..amount {
                cart = cart.add_to_cart(&p);
            }
        }
        cart
    }

    #[test]
    fn test_first_add_creates_entry() {
        let cart = Cart::new().add_to_cart(&product(1, 9.99));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(1).unwrap().amount, 1);
        assert_eq!(cart.get(1).unwrap().product.title, "Product 1");
    }

    #[test]
    fn test_double_add_increments_by_two() {
        for start in [0u32, 1, 4] {
            let base = cart_with(&[(5, 1), (1, start)]);
            let original = base.get(1).map(|i| i.amount).unwrap_or(0);
            let p = product(1, 10.0);

            let cart = base.add_to_cart(&p).add_to_cart(&p);

            let entries: Vec<_> = cart.items().iter().filter(|i| i.id() == 1).collect();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].amount, original + 2);
        }
    }

    #[test]
    fn test_add_keeps_stored_fields() {
        let original = product(1, 10.0).with_description("first seen");
        let changed = product(1, 99.0).with_description("later copy");

        let cart = Cart::new().add_to_cart(&original).add_to_cart(&changed);

        let item = cart.get(1).unwrap();
        assert_eq!(item.amount, 2);
        assert_eq!(item.product.description, "first seen");
        assert_eq!(item.product.price, 10.0);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let cart = cart_with(&[(3, 1), (1, 1), (2, 1)]).add_to_cart(&product(1, 10.0));

        let ids: Vec<_> = cart.items().iter().map(CartItem::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_at_one_drops_entry() {
        let cart = cart_with(&[(1, 1), (2, 2)]).remove_from_cart(1);

        assert!(cart.get(1).is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(2).unwrap().amount, 2);
    }

    #[test]
    fn test_remove_decrements_and_keeps_order() {
        let before = cart_with(&[(1, 2), (2, 3), (3, 1)]);
        let after = before.remove_from_cart(2);

        let view: Vec<_> = after.items().iter().map(|i| (i.id(), i.amount)).collect();
        assert_eq!(view, vec![(1, 2), (2, 2), (3, 1)]);
        assert_eq!(after.get(1), before.get(1));
        assert_eq!(after.get(3), before.get(3));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let before = cart_with(&[(1, 2), (2, 1)]);
        assert_eq!(before.remove_from_cart(42), before);
        assert_eq!(Cart::new().remove_from_cart(1), Cart::new());
    }

    #[test]
    fn test_total_item_count() {
        let cart = cart_with(&[(1, 2), (2, 3)]);
        assert_eq!(cart.total_item_count(), 5);
        assert_eq!(total_item_count(cart.items()), 5);
        assert_eq!(Cart::new().total_item_count(), 0);
    }

    #[test]
    fn test_total_price() {
        let cart = Cart::new()
            .add_to_cart(&product(1, 10.5))
            .add_to_cart(&product(1, 10.5))
            .add_to_cart(&product(2, 4.0));

        assert_eq!(cart.total_price(), 25.0);
        assert_eq!(cart.display_total(), "$25.00");
        assert_eq!(cart.get(1).unwrap().display_line_total(), "$21.00");
    }

    #[test]
    fn test_serializes_flat() {
        let cart = Cart::new().add_to_cart(&product(1, 2.5).with_category("jewelery"));
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["category"], "jewelery");
        assert_eq!(json[0]["amount"], 1);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    fn entry(id: ProductId, amount: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": format!("Product {}", id),
            "price": 1.0,
            "amount": amount,
        })
    }

    #[test]
    fn test_deserialize_rejects_zero_amount() {
        let json = serde_json::json!([entry(1, 0), entry(1, 3)]);
        let err = serde_json::from_value::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("amount 0"));

        let json = serde_json::json!([entry(2, 1), entry(5, 0)]);
        assert!(serde_json::from_value::<Cart>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = serde_json::json!([entry(1, 2), entry(2, 1), entry(1, 3)]);
        let err = serde_json::from_value::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_try_from_valid_items() {
        let items = vec![
            CartItem {
                product: product(3, 1.0),
                amount: 2,
            },
            CartItem::from_product(&product(1, 1.0)),
        ];
        let cart = Cart::try_from(items).unwrap();

        let view: Vec<_> = cart.items().iter().map(|i| (i.id(), i.amount)).collect();
        assert_eq!(view, vec![(3, 2), (1, 1)]);
        assert_eq!(cart.remove_from_cart(3).get(3).unwrap().amount, 1);
    }

    #[test]
    fn test_add_saturates_at_max_amount() {
        let p = product(1, 1.0);
        let cart = Cart {
            items: vec![CartItem {
                product: p.clone(),
                amount: u32::MAX - 1,
            }],
        };

        let cart = cart.add_to_cart(&p);
        assert_eq!(cart.get(1).unwrap().amount, u32::MAX);

        let cart = cart.add_to_cart(&p);
        assert_eq!(cart.get(1).unwrap().amount, u32::MAX);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_item_count_saturates() {
        let cart = Cart {
            items: vec![
                CartItem {
                    product: product(1, 1.0),
                    amount: u32::MAX,
                },
                CartItem::from_product(&product(2, 1.0)),
            ],
        };

        assert_eq!(cart.total_item_count(), u32::MAX);
        assert_eq!(total_item_count(cart.items()), u32::MAX);
    }
}
