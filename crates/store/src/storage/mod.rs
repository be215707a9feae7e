//! Persisted key/value blob storage.
//!
//! Each store serializes its entire state to one string-keyed JSON blob -
//! the same layout the browser-local variant of the storefront used. The
//! backend does not interpret the blobs; it only loads and stores strings.
//! Each key has a single writer (the store that owns it), so no locking is
//! layered on top.

mod local;
mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Blob keys used by the stores.
pub mod keys {
    /// Serialized product list.
    pub const PRODUCTS: &str = "products";
    /// Serialized cart line list.
    pub const CART: &str = "cart";
    /// Serialized wishlist.
    pub const WISHLIST: &str = "wishlist";
}

/// A string-keyed JSON blob store.
pub trait StorageBackend {
    /// Load the blob for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium fails; a missing key is not
    /// an error.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store the blob for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium fails.
    fn store(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the blob for `key`. Deleting a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium fails.
    fn remove(&self, key: &str) -> Result<()>;
}
