//! Error types for the store crate.
//!
//! Absent-id conditions (remove/adjust/lookup on an unknown product) are
//! deliberately NOT errors - the stores log and treat them as no-ops. Only
//! validation failures and storage faults surface as `StoreError`.

use thiserror::Error;

/// Errors produced by the catalog, cart, and wishlist stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing or invalid on a catalog add.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing a persisted blob failed.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A persisted blob could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
