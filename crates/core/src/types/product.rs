//! Catalog product type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A product in the catalog.
///
/// Owned by the product store; stock is mutated only through the store's
/// stock-adjustment operation. `stock` can never go negative - adjustments
/// clamp at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Merchant-assigned unique id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Primary image reference.
    pub image: String,
    /// Image shown on hover.
    pub hover_image: String,
    /// Purchasable units remaining.
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Whether the product is currently purchasable.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
