//! Cart line item models.

use almacen_core::CartItemId;
use serde::{Deserialize, Serialize};

/// A stored cart line item.
///
/// There is no uniqueness constraint on `product_id`: adding the same
/// product twice creates two rows (no quantity merge).
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CartItem {
    /// Auto-assigned row id.
    pub id: CartItemId,
    /// External marketplace listing id.
    pub product_id: String,
    /// Listing title.
    pub title: String,
    /// Unit price in Argentine pesos.
    pub price: f64,
    /// Units of this line.
    pub quantity: i64,
    /// Image URL.
    pub image: String,
}

/// Payload for adding an item to the cart.
///
/// Unknown fields are rejected at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCartItem {
    pub product_id: String,
    pub title: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub image: String,
}

const fn default_quantity() -> i64 {
    1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_item_quantity_defaults_to_one() {
        let item: NewCartItem = serde_json::from_value(serde_json::json!({
            "product_id": "MLA123",
            "title": "Leche entera 1L",
            "price": 500.0,
            "image": "https://example.com/leche.jpg"
        }))
        .unwrap();

        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_new_cart_item_rejects_unknown_fields() {
        let result: Result<NewCartItem, _> = serde_json::from_value(serde_json::json!({
            "product_id": "MLA123",
            "title": "Leche entera 1L",
            "price": 500.0,
            "image": "https://example.com/leche.jpg",
            "stock": 4
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_new_cart_item_rejects_missing_fields() {
        let result: Result<NewCartItem, _> = serde_json::from_value(serde_json::json!({
            "product_id": "MLA123",
            "price": 500.0
        }));

        assert!(result.is_err());
    }
}
