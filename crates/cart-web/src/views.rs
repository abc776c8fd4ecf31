//! # Views
//!
//! Server-rendered HTML for the storefront: loading spinner, failure message,
//! product grid, cart badge, and the slide-out cart drawer.
//!
//! Every button is a small form posting to an event route; the handler
//! updates the storefront and redirects back to `/`.

use askama_escape::{escape, Html};
use cart_core::{Cart, CartItem, Catalog, CatalogError, Product, StorefrontView};
use std::fmt::Display;

const STYLE: &str = r#"
body { font-family: system-ui; margin: 0; background: #f5f5f5; }
.wrapper { margin: 40px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 24px; }
.item { display: flex; flex-direction: column; justify-content: space-between; background: white; border: 1px solid lightblue; border-radius: 20px; height: 100%; }
.item img { max-height: 250px; object-fit: cover; border-radius: 20px 20px 0 0; }
.item .info { font-family: Arial, Helvetica, sans-serif; padding: 1rem; height: 100%; }
.item button { width: 100%; border-radius: 0 0 20px 20px; padding: 12px; border: 0; cursor: pointer; }
.cart-button { position: fixed; z-index: 100; right: 20px; top: 20px; }
.badge { background: #f44336; color: white; border-radius: 10px; padding: 2px 8px; margin-left: 4px; }
.drawer { position: fixed; z-index: 200; top: 0; right: 0; height: 100vh; width: 500px; overflow-y: auto; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.2); padding: 20px; box-sizing: border-box; }
.cart-item { display: flex; justify-content: space-between; border-bottom: 1px solid lightblue; padding-bottom: 20px; }
.cart-item img { max-width: 80px; object-fit: cover; margin-left: 40px; }
.cart-item .buttons { display: flex; justify-content: space-between; align-items: center; }
.spinner { padding: 300px; text-align: center; }
"#;

/// Escape catalog text for HTML
fn esc(text: &str) -> impl Display + '_ {
    escape(text, Html)
}

/// Render whatever the storefront currently shows as a full page
pub fn render(view: StorefrontView<'_>) -> String {
    let body = match view {
        StorefrontView::Loading => loading(),
        StorefrontView::Failed(err) => failed(err),
        StorefrontView::Ready {
            catalog,
            cart,
            drawer_open,
            badge,
        } => ready(catalog, cart, drawer_open, badge),
    };
    page(&body)
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Quick Cart</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
        STYLE, body
    )
}

/// Spinner shown while the catalog is pending. Refreshes itself.
pub fn loading() -> String {
    r#"<meta http-equiv="refresh" content="1">
<div class="spinner" role="progressbar" aria-busy="true">Loading...</div>"#
        .to_string()
}

/// Replaces the whole view when the catalog failed to load
pub fn failed(err: &CatalogError) -> String {
    format!("<div>{}</div>", esc(err.user_message()))
}

fn ready(catalog: &Catalog, cart: &Cart, drawer_open: bool, badge: u32) -> String {
    let mut html = String::from(r#"<div class="wrapper">"#);

    if drawer_open {
        html.push_str(&drawer(cart));
    }
    html.push_str(&cart_button(badge));
    html.push_str(&product_grid(catalog));

    html.push_str("</div>");
    html
}

/// Cart button with the total item count badge
pub fn cart_button(badge: u32) -> String {
    format!(
        r#"<form class="cart-button" method="post" action="/drawer/open">
<button type="submit" aria-label="Open cart">&#128722;<span class="badge" id="cart-badge">{}</span></button>
</form>"#,
        badge
    )
}

/// One card per catalog product
pub fn product_grid(catalog: &Catalog) -> String {
    let mut html = String::from(r#"<div class="grid">"#);
    for product in catalog.iter() {
        html.push_str(&product_card(product));
    }
    html.push_str("</div>");
    html
}

fn product_card(product: &Product) -> String {
    format!(
        r#"<div class="item" data-id="{id}">
<img src="{image}" alt="{title}">
<div class="info">
<h3>{title}</h3>
<p>{description}</p>
<h3>{price}</h3>
</div>
<form method="post" action="/cart/add/{id}"><button type="submit">Add to cart</button></form>
</div>"#,
        id = product.id,
        image = esc(&product.image),
        title = esc(&product.title),
        description = esc(&product.description),
        price = product.display_price(),
    )
}

/// Drawer contents: one row per entry, then the cart total
pub fn drawer(cart: &Cart) -> String {
    let mut html = String::from(
        r#"<aside class="drawer" id="cart-drawer">
<form method="post" action="/drawer/close"><button type="submit" aria-label="Close cart">&times;</button></form>
<h2>Your Shopping Cart</h2>"#,
    );

    if cart.is_empty() {
        html.push_str("<p>No items in cart.</p>");
    }
    for item in cart.items() {
        html.push_str(&cart_row(item));
    }

    html.push_str(&format!(
        r#"<h2>Total: <span id="cart-total">{}</span></h2>
</aside>"#,
        cart.display_total()
    ));
    html
}

fn cart_row(item: &CartItem) -> String {
    format!(
        r#"<div class="cart-item" data-id="{id}">
<div>
<h3>{title}</h3>
<div class="information">
<p>Price: {price}</p>
<p>Total: {total}</p>
</div>
<div class="buttons">
<form method="post" action="/cart/remove/{id}"><button type="submit">-</button></form>
<p><span class="amount">{amount}</span></p>
<form method="post" action="/cart/add/{id}"><button type="submit">+</button></form>
</div>
</div>
<img src="{image}" alt="{title}">
</div>"#,
        id = item.id(),
        title = esc(&item.product.title),
        price = item.product.display_price(),
        total = item.display_line_total(),
        amount = item.amount,
        image = esc(&item.product.image),
    )
}
