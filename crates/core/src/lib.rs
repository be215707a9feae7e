//! SDFM Core - Shared types library.
//!
//! This crate provides common types used across all SDFM components:
//! - `store` - Catalog, cart, and wishlist state containers
//! - `cli` - Command-line surface for driving the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, stock deltas, wishlist items, orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
