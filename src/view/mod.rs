//! Plain-text rendering of the storefront page.
//!
//! Rendering only reads the snapshot; it never changes session state.

use crate::basket::Basket;
use crate::domain::{Product, QueryParams, SortOption};

/// Everything needed to draw the page at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontSnapshot {
    pub params: QueryParams,
    pub products: Vec<Product>,
    pub results_text: String,
    pub basket: Basket,
}

const IMAGE_DIR: &str = "assets/product_images/";

pub fn format_price(amount: f64) -> String {
    format!("£{:.2}", amount)
}

/// The action button shown on a product card. Out-of-stock products get a
/// disabled button and cannot be added.
pub fn product_button(product: &Product) -> &'static str {
    if product.in_stock() {
        "[Add to basket]"
    } else {
        "[Out of stock]"
    }
}

pub fn render_product(product: &Product) -> String {
    let mut card = format!(
        "{}\n {} ({}/5)\n",
        product.name,
        format_price(product.price),
        product.rating
    );
    if !product.image_link.is_empty() {
        card.push_str(&format!("<{}{}>\n", IMAGE_DIR, product.image_link));
    }
    card.push_str(product_button(product));
    card
}

/// Lines of the basket panel, or nothing while the panel is closed.
pub fn render_basket(basket: &Basket) -> Vec<String> {
    if !basket.is_open() {
        return Vec::new();
    }

    if basket.is_empty() {
        return vec!["Your basket is empty".to_string()];
    }

    let mut lines: Vec<String> = basket
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{} ({}) - {}",
                entry.product.name,
                format_price(entry.product.price),
                entry.quantity
            )
        })
        .collect();
    lines.push(format!("Total: {}", format_price(basket.total())));
    lines
}

pub fn render_controls(params: &QueryParams) -> String {
    let options: Vec<String> = SortOption::ALL
        .iter()
        .map(|option| {
            if *option == params.sort_option {
                format!("<{}>", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect();

    format!(
        "Search: {:?}\nSort: {}\n[{}] In stock",
        params.search_term,
        options.join(" | "),
        if params.in_stock_only { "x" } else { " " }
    )
}

pub fn render(snapshot: &StorefrontSnapshot) -> String {
    let mut sections = vec![render_controls(&snapshot.params)];

    let basket = render_basket(&snapshot.basket);
    if !basket.is_empty() {
        sections.push(basket.join("\n"));
    }

    sections.push(snapshot.results_text.clone());
    sections.extend(snapshot.products.iter().map(render_product));
    sections.join("\n\n")
}
