//! # Product Types
//!
//! Catalog types for quick-cart.
//! Products arrive as a JSON array from the catalog endpoint, or from a TOML
//! fixture for offline use.

use crate::error::CatalogResult;
use serde::{Deserialize, Serialize};

/// Catalog product identifier; any JSON integer the feed can carry
pub type ProductId = i64;

/// A product in the catalog.
///
/// Field names match the catalog feed exactly. Unknown feed fields
/// (`rating`, a stray `amount`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,

    /// Category label (e.g., "electronics")
    #[serde(default)]
    pub category: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Unit price in dollars
    pub price: f64,

    /// Display title
    pub title: String,
}

impl Product {
    /// Create a product with the required fields
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            category: String::new(),
            description: String::new(),
            image: String::new(),
            price,
            title: title.into(),
        }
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Format the unit price for display (e.g., "$10.00")
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a dollar amount for display
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Read-only product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Builder: add a product
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Find a product by ID
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate products in feed order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Parse the catalog feed: a bare JSON array of products
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    /// Load a catalog fixture from a TOML string (`[[products]]` tables)
    pub fn from_toml(toml_str: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const FEED: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "amount": 7
        }
    ]"#;

    #[test]
    fn test_parse_feed() {
        let catalog = Catalog::from_json(FEED).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(1).unwrap();
        assert_eq!(first.title, "Fjallraven - Foldsack No. 1 Backpack");
        assert_eq!(first.category, "men's clothing");
        assert_eq!(first.price, 109.95);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_parse_feed_wide_ids() {
        let feed = r#"[
            {"id": 5000000000, "title": "Archive Lot", "price": 1.0},
            {"id": -3, "title": "Legacy Item", "price": 2.0}
        ]"#;
        let catalog = Catalog::from_json(feed).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(5_000_000_000).unwrap().title, "Archive Lot");
        assert_eq!(catalog.get(-3).unwrap().title, "Legacy Item");
    }

    #[test]
    fn test_parse_feed_rejects_object() {
        let err = Catalog::from_json(r#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_toml() {
        let fixture = r#"
            [[products]]
            id = 7
            title = "White Gold Plated Princess"
            price = 9.99
            category = "jewelery"
        "#;
        let catalog = Catalog::from_toml(fixture).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().category, "jewelery");
        assert_eq!(catalog.get(7).unwrap().image, "");
    }

    #[test]
    fn test_price_display() {
        let product = Product::new(1, "Backpack", 109.95);
        assert_eq!(product.display_price(), "$109.95");
        assert_eq!(format_price(22.3), "$22.30");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new(3, "Jacket", 55.99)
            .with_category("men's clothing")
            .with_description("Great outerwear")
            .with_image("https://example.com/jacket.jpg");

        assert_eq!(product.id, 3);
        assert_eq!(product.description, "Great outerwear");
        assert_eq!(product.image, "https://example.com/jacket.jpg");
    }
}
