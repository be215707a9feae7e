//! Cart store: stock-aware line item management with deferred writebacks.

use rust_decimal::Decimal;
use sdfm_core::{CartLine, NewCartItem, ProductId, StockDelta};
use tracing::{debug, info, warn};

use crate::catalog::ProductStore;
use crate::error::Result;
use crate::storage::{StorageBackend, keys};

/// Owns the shopping cart and persists it to the `cart` blob after every
/// mutation.
///
/// Stock checks read the product store; stock writes never happen here.
/// Every mutation returns the [`StockDelta`]s it computed, and the caller
/// applies them through a [`crate::reconcile::DeltaQueue`] once the cart's
/// own state transition has settled.
pub struct CartStore {
    storage: Box<dyn StorageBackend>,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart over a storage backend. Call
    /// [`CartStore::fetch`] to load persisted state.
    #[must_use]
    pub fn new(storage: impl StorageBackend + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            lines: Vec::new(),
        }
    }

    /// Load the persisted cart, replacing in-memory state. Empty storage
    /// yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be read or decoded.
    pub fn fetch(&mut self) -> Result<()> {
        self.lines = match self.storage.load(keys::CART)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        debug!(lines = self.lines.len(), "Loaded cart");
        Ok(())
    }

    /// Add one unit of a product to the cart.
    ///
    /// Out-of-stock products are silently rejected: the cart is unchanged
    /// and no error surfaces (the UI communicates availability separately).
    /// Stock is the only gate - it is read after prior reservations were
    /// reconciled, so any positive count admits one more unit. Each actual
    /// increment yields one `-1` delta for the reconciliation pass.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the cart fails.
    pub fn add(&mut self, item: NewCartItem, catalog: &ProductStore) -> Result<Vec<StockDelta>> {
        if catalog.stock(&item.product_id) == 0 {
            info!(id = %item.product_id, "Add rejected: out of stock");
            return Ok(Vec::new());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == item.product_id) {
            line.quantity += 1;
            debug!(id = %item.product_id, quantity = line.quantity, "Incremented cart line");
        } else {
            self.lines.push(CartLine {
                product_id: item.product_id.clone(),
                name: item.name,
                price: item.price,
                quantity: 1,
                image: item.image,
            });
            debug!(id = %item.product_id, "Created cart line");
        }

        self.persist()?;
        Ok(vec![StockDelta::new(item.product_id, -1)])
    }

    /// Remove a line entirely, returning its full quantity to the stock
    /// pool via the reconciliation queue. No-op if the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the cart fails.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<Vec<StockDelta>> {
        let Some(pos) = self.lines.iter().position(|l| &l.product_id == product_id) else {
            debug!(id = %product_id, "Remove ignored: not in cart");
            return Ok(Vec::new());
        };
        let line = self.lines.remove(pos);
        info!(id = %product_id, quantity = line.quantity, "Removed cart line");
        self.persist()?;
        Ok(vec![StockDelta::new(
            product_id.clone(),
            i64::from(line.quantity),
        )])
    }

    /// Set a line's quantity.
    ///
    /// Rejected (line unchanged, no deltas) when the requested quantity
    /// exceeds current stock. A quantity of zero removes the line. The
    /// yielded delta is the inverse of the cart's quantity change, so stock
    /// absorbs exactly what the cart gave up or took.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the cart fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        new_quantity: u32,
        catalog: &ProductStore,
    ) -> Result<Vec<StockDelta>> {
        let Some(pos) = self.lines.iter().position(|l| &l.product_id == product_id) else {
            debug!(id = %product_id, "Update ignored: not in cart");
            return Ok(Vec::new());
        };

        if new_quantity > catalog.stock(product_id) {
            warn!(
                id = %product_id,
                requested = new_quantity,
                stock = catalog.stock(product_id),
                "Quantity update rejected: exceeds stock"
            );
            return Ok(Vec::new());
        }

        #[allow(clippy::indexing_slicing)] // pos came from position() above
        let previous = self.lines[pos].quantity;
        if new_quantity == 0 {
            self.lines.remove(pos);
            debug!(id = %product_id, "Quantity reached zero, removed line");
        } else {
            #[allow(clippy::indexing_slicing)]
            {
                self.lines[pos].quantity = new_quantity;
            }
            debug!(id = %product_id, quantity = new_quantity, "Updated cart line");
        }

        self.persist()?;
        let change = i64::from(previous) - i64::from(new_quantity);
        if change == 0 {
            return Ok(Vec::new());
        }
        Ok(vec![StockDelta::new(product_id.clone(), change)])
    }

    /// Empty the cart.
    ///
    /// Deliberately yields NO stock deltas: reserved stock is lost unless
    /// the caller reconciles separately. This mirrors the observed
    /// storefront policy and is documented behavior, not an oversight to
    /// patch here.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the cart fails.
    pub fn clear(&mut self) -> Result<()> {
        info!(lines = self.lines.len(), "Clearing cart");
        self.lines.clear();
        self.persist()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Read access to the cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.lines)?;
        self.storage.store(keys::CART, &blob)
    }
}
