//! View-model types for rendering a session.
//!
//! Display formatting lives here, not in the domain types: the store and the
//! summary hand out exact decimal values, and this layer turns them into
//! strings a cart line or order summary can show.

use fernwood_core::Price;

use crate::cart::CartSnapshot;
use crate::models::Product;

/// Format a price for display (e.g., "$19.99").
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("${:.2}", price.amount())
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for CartLineView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            price: format_price(product.price),
            image: product.image.clone(),
        }
    }
}

/// Cart display data with the running total.
#[derive(Debug, Clone)]
pub struct CartSummaryView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: usize,
}

impl CartSummaryView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: format_price(Price::ZERO),
            item_count: 0,
        }
    }

    /// Render a snapshot and its total.
    #[must_use]
    pub fn render(items: &CartSnapshot, total: Price) -> Self {
        Self {
            lines: items.iter().map(CartLineView::from).collect(),
            total: format_price(total),
            item_count: items.len(),
        }
    }
}
