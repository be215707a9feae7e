//! Cart line items and queued stock adjustments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// One entry in a cart, aggregating quantity for a single product.
///
/// A cart holds at most one line per product id; duplicate adds increment
/// the quantity. `product_id` is a soft reference - deleting the product
/// from the catalog does not remove the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the referenced product.
    pub product_id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price at time of add.
    pub price: Decimal,
    /// Units of this product in the cart. Always >= 1.
    pub quantity: u32,
    /// Image reference carried for display.
    pub image: String,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Input for adding a product to the cart.
///
/// Carries the display fields the cart snapshots when it creates a new line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

impl From<&super::Product> for NewCartItem {
    fn from(product: &super::Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// A pending, queued adjustment to a product's stock.
///
/// Created synchronously by a cart mutation, applied exactly once by the
/// reconciliation pass, then discarded. Negative `change` reserves stock,
/// positive returns it to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDelta {
    /// Product whose stock the delta targets.
    pub product_id: ProductId,
    /// Signed adjustment to apply.
    pub change: i64,
}

impl StockDelta {
    /// Create a delta for a product.
    #[must_use]
    pub const fn new(product_id: ProductId, change: i64) -> Self {
        Self { product_id, change }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new("p1"),
            name: "SDFM Hoodie".to_string(),
            price: Decimal::new(8999, 2),
            quantity,
            image: "/images/hoodie.jpg".to_string(),
        }
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(line(1).subtotal(), Decimal::new(8999, 2));
        assert_eq!(line(3).subtotal(), Decimal::new(26997, 2));
    }

    #[test]
    fn test_new_cart_item_from_product() {
        let product = super::super::Product {
            id: ProductId::new("p1"),
            name: "SDFM Hoodie".to_string(),
            price: Decimal::new(8999, 2),
            image: "/images/hoodie.jpg".to_string(),
            hover_image: "/images/hoodie-back.jpg".to_string(),
            stock: 5,
        };
        let item = NewCartItem::from(&product);
        assert_eq!(item.product_id, product.id);
        assert_eq!(item.name, product.name);
        assert_eq!(item.price, product.price);
        assert_eq!(item.image, product.image);
    }

    #[test]
    fn test_cart_line_serde_round_trip() {
        let original = line(2);
        let json = serde_json::to_string(&original).expect("serialize");
        let back: CartLine = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, original);
    }
}
