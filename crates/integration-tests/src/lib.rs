//! Shared helpers for the SDFM integration tests.
//!
//! The actual tests live in `tests/`; this crate only provides fixture
//! builders used across them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use sdfm_core::{Product, ProductId};

/// A catalog product with the given id and stock, priced at 89.99.
#[must_use]
pub fn product(id: &str, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("SDFM {id}"),
        price: Decimal::new(8999, 2),
        image: format!("/images/{id}-front.jpg"),
        hover_image: format!("/images/{id}-back.jpg"),
        stock,
    }
}
