//! Product domain type.

use fernwood_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A purchasable item.
///
/// Catalog entry and cart line item share this one shape. A cart holds one
/// entry per add action, so there is no quantity field; adding the same
/// product twice yields two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Seed identifier. Not guaranteed unique across seed entries, so
    /// id-based operations may match more than one entry.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Image URL, display-only.
    pub image: String,
    /// Available inventory count. Informational; cart operations never
    /// decrement it.
    pub stock: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_roundtrip() {
        let json = r#"{
            "id": 3,
            "title": "Mens Cotton Jacket",
            "price": "55.99",
            "image": "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg",
            "stock": 5
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::from_cents(5599));
        assert_eq!(product.stock, 5);

        let back = serde_json::to_string(&product).unwrap();
        let reparsed: Product = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, product);
    }
}
