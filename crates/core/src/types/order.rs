//! Checkout order types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shipping and contact details collected by the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

/// A placed order.
///
/// Checkout does not re-validate cart lines against the current catalog;
/// the total is whatever the cart summed at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Generated order id.
    pub id: Uuid,
    /// Shipping and contact details as submitted.
    pub details: OrderForm,
    /// Cart total at submission time.
    pub total: Decimal,
    /// Submission timestamp.
    pub placed_at: DateTime<Utc>,
}
