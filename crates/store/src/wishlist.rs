//! Wishlist store.

use sdfm_core::{ProductId, WishlistItem};
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::{StorageBackend, keys};

/// Owns the wishlist and persists it to the `wishlist` blob after every
/// mutation. At most one entry per product id; re-adding is a no-op.
pub struct WishlistStore {
    storage: Box<dyn StorageBackend>,
    items: Vec<WishlistItem>,
}

impl WishlistStore {
    /// Create an empty wishlist over a storage backend. Call
    /// [`WishlistStore::fetch`] to load persisted state.
    #[must_use]
    pub fn new(storage: impl StorageBackend + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            items: Vec::new(),
        }
    }

    /// Load the persisted wishlist, replacing in-memory state.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be read or decoded.
    pub fn fetch(&mut self) -> Result<()> {
        self.items = match self.storage.load(keys::WISHLIST)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        debug!(items = self.items.len(), "Loaded wishlist");
        Ok(())
    }

    /// Save an item. No-op if the product is already saved.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting fails.
    pub fn add(&mut self, item: WishlistItem) -> Result<()> {
        if self.items.iter().any(|i| i.id == item.id) {
            debug!(id = %item.id, "Already wishlisted");
            return Ok(());
        }
        info!(id = %item.id, "Added to wishlist");
        self.items.push(item);
        self.persist()
    }

    /// Remove an item by product id. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        if self.items.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting fails.
    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.persist()
    }

    /// Read access to the saved items.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.items)?;
        self.storage.store(keys::WISHLIST, &blob)
    }
}
