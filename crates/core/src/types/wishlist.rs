//! Wishlist entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// A saved-for-later product.
///
/// Snapshots the display fields at the time of saving; `stock` is the
/// last-known count and is not kept in sync with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    #[serde(default)]
    pub stock: u32,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            stock: product.stock,
        }
    }
}
