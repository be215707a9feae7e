//! SDFM Store - storefront state containers.
//!
//! Two cooperating stores back the storefront UI:
//!
//! - [`catalog::ProductStore`] owns the catalog and the authoritative stock
//!   counter.
//! - [`cart::CartStore`] owns the shopping cart and enforces stock-aware
//!   add/update semantics.
//!
//! Cart mutations never touch the catalog directly. Each mutation returns
//! the [`sdfm_core::StockDelta`]s it computed; the caller pushes them onto a
//! [`reconcile::DeltaQueue`] and runs a reconciliation pass against the
//! product store once its own state transition has settled. This keeps the
//! two stores from mutating each other mid-update while preserving a strict
//! enqueue-order guarantee for stock writebacks.
//!
//! # Example
//!
//! ```rust
//! use sdfm_core::{NewCartItem, Product, ProductId};
//! use sdfm_store::cart::CartStore;
//! use sdfm_store::catalog::ProductStore;
//! use sdfm_store::reconcile::DeltaQueue;
//! use sdfm_store::storage::MemoryStorage;
//!
//! # fn main() -> Result<(), sdfm_store::error::StoreError> {
//! let mut catalog = ProductStore::new(MemoryStorage::shared());
//! catalog.add(Product {
//!     id: ProductId::new("p1"),
//!     name: "SDFM Hoodie".into(),
//!     price: "89.99".parse().expect("price"),
//!     image: "/img/front.jpg".into(),
//!     hover_image: "/img/back.jpg".into(),
//!     stock: 2,
//! })?;
//!
//! let mut cart = CartStore::new(MemoryStorage::shared());
//! let mut queue = DeltaQueue::new();
//!
//! let item = NewCartItem::from(&catalog.products()[0]);
//! queue.push_all(cart.add(item, &catalog)?);
//! queue.reconcile(&mut catalog)?;
//!
//! assert_eq!(cart.count(), 1);
//! assert_eq!(catalog.stock(&ProductId::new("p1")), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod remote;
pub mod storage;
pub mod wishlist;

pub use cart::CartStore;
pub use catalog::ProductStore;
pub use error::StoreError;
pub use reconcile::DeltaQueue;
pub use wishlist::WishlistStore;
