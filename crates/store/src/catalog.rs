//! Product store: catalog state and the authoritative stock counter.

use sdfm_core::{Product, ProductId};
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::storage::{StorageBackend, keys};

/// Owns the catalog and persists it to the `products` blob after every
/// mutation.
///
/// Stock is mutated only through [`ProductStore::adjust_stock`]; the cart
/// never writes stock directly. Absent-id operations are silent no-ops by
/// policy, not errors.
pub struct ProductStore {
    storage: Box<dyn StorageBackend>,
    products: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store over a storage backend. Call
    /// [`ProductStore::fetch_all`] to load persisted state.
    #[must_use]
    pub fn new(storage: impl StorageBackend + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            products: Vec::new(),
        }
    }

    /// Load the full catalog from storage, replacing in-memory state.
    ///
    /// Empty storage yields an empty catalog; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be read or decoded.
    pub fn fetch_all(&mut self) -> Result<()> {
        self.products = match self.storage.load(keys::PRODUCTS)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        debug!(count = self.products.len(), "Loaded catalog");
        Ok(())
    }

    /// Append a new product and persist the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if a required field is blank or
    /// the price is negative, and a storage error if persisting fails.
    pub fn add(&mut self, product: Product) -> Result<()> {
        validate(&product)?;
        if self.products.iter().any(|p| p.id == product.id) {
            warn!(id = %product.id, "Adding product with duplicate id");
        }
        info!(id = %product.id, name = %product.name, "Adding product");
        self.products.push(product);
        self.persist()
    }

    /// Replace the whole catalog and persist, including an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if any incoming product is
    /// invalid (the catalog is left unchanged), and a storage error if
    /// persisting fails.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<()> {
        for product in &products {
            validate(product)?;
        }
        info!(count = products.len(), "Replacing catalog");
        self.products = products;
        self.persist()
    }

    /// Delete a product by id and persist. No-op if the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<()> {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() == before {
            debug!(%id, "Remove ignored: unknown product");
            return Ok(());
        }
        info!(%id, "Removed product");
        self.persist()
    }

    /// Apply a signed stock adjustment, clamping at zero, and persist.
    /// No-op if the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn adjust_stock(&mut self, id: &ProductId, delta: i64) -> Result<()> {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            debug!(%id, delta, "Stock adjustment ignored: unknown product");
            return Ok(());
        };
        let adjusted = i64::from(product.stock).saturating_add(delta).max(0);
        product.stock = u32::try_from(adjusted).unwrap_or(u32::MAX);
        debug!(%id, delta, stock = product.stock, "Adjusted stock");
        self.persist()
    }

    /// Current stock for a product, or `0` for unknown ids.
    #[must_use]
    pub fn stock(&self, id: &ProductId) -> u32 {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .map_or(0, |p| p.stock)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Read access to the catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.products)?;
        self.storage.store(keys::PRODUCTS, &blob)
    }
}

fn validate(product: &Product) -> Result<()> {
    if product.id.is_empty() {
        return Err(StoreError::Validation("product id is required".into()));
    }
    if product.name.trim().is_empty() {
        return Err(StoreError::Validation("product name is required".into()));
    }
    if product.price.is_sign_negative() {
        return Err(StoreError::Validation(
            "product price must not be negative".into(),
        ));
    }
    if product.image.trim().is_empty() || product.hover_image.trim().is_empty() {
        return Err(StoreError::Validation(
            "product images are required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rust_decimal::Decimal;

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(4999, 2),
            image: "/img/front.jpg".to_string(),
            hover_image: "/img/back.jpg".to_string(),
            stock,
        }
    }

    fn store_with(products: &[Product]) -> ProductStore {
        let mut store = ProductStore::new(MemoryStorage::shared());
        for p in products {
            store.add(p.clone()).unwrap();
        }
        store
    }

    #[test]
    fn test_fetch_all_empty_storage_defaults_to_empty_catalog() {
        let mut store = ProductStore::new(MemoryStorage::shared());
        store.fetch_all().unwrap();
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_fetch_all_replaces_in_memory_state() {
        let storage = MemoryStorage::shared();
        let mut writer = ProductStore::new(storage.clone());
        writer.add(product("p1", 3)).unwrap();

        let mut reader = ProductStore::new(storage);
        reader.fetch_all().unwrap();
        assert_eq!(reader.products(), writer.products());
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let mut store = ProductStore::new(MemoryStorage::shared());
        let err = store.add(product("", 1)).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = ProductStore::new(MemoryStorage::shared());
        let mut p = product("p1", 1);
        p.name = "   ".to_string();
        assert!(matches!(
            store.add(p).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut store = ProductStore::new(MemoryStorage::shared());
        let mut p = product("p1", 1);
        p.price = Decimal::new(-1, 2);
        assert!(matches!(
            store.add(p).unwrap_err(),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_replace_all_with_empty_list_clears_persisted_catalog() {
        let storage = MemoryStorage::shared();
        let mut store = ProductStore::new(storage.clone());
        store.add(product("p1", 3)).unwrap();

        store.replace_all(Vec::new()).unwrap();
        let mut reloaded = ProductStore::new(storage);
        reloaded.fetch_all().unwrap();
        assert!(reloaded.products().is_empty());
    }

    #[test]
    fn test_replace_all_rejects_invalid_product_unchanged() {
        let mut store = store_with(&[product("p1", 3)]);
        let err = store
            .replace_all(vec![product("p2", 1), product("", 1)])
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = store_with(&[product("p1", 1)]);
        store.remove(&ProductId::new("missing")).unwrap();
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn test_adjust_stock_clamps_at_zero() {
        let mut store = store_with(&[product("p1", 2)]);
        let id = ProductId::new("p1");
        store.adjust_stock(&id, -5).unwrap();
        assert_eq!(store.stock(&id), 0);
    }

    #[test]
    fn test_adjust_stock_unknown_id_is_noop() {
        let mut store = store_with(&[product("p1", 2)]);
        store.adjust_stock(&ProductId::new("missing"), -1).unwrap();
        assert_eq!(store.stock(&ProductId::new("p1")), 2);
    }

    #[test]
    fn test_stock_never_negative_over_any_sequence() {
        let mut store = store_with(&[product("p1", 3)]);
        let id = ProductId::new("p1");
        for delta in [-1, -1, -5, 2, -10, 1, -1] {
            store.adjust_stock(&id, delta).unwrap();
        }
        // u32 by type; the interesting check is that clamping held mid-sequence.
        assert_eq!(store.stock(&id), 0);
    }

    #[test]
    fn test_stock_unknown_id_is_zero() {
        let store = store_with(&[]);
        assert_eq!(store.stock(&ProductId::new("ghost")), 0);
    }

    #[test]
    fn test_mutations_persist() {
        let storage = MemoryStorage::shared();
        let mut store = ProductStore::new(storage.clone());
        store.add(product("p1", 4)).unwrap();
        store.adjust_stock(&ProductId::new("p1"), -1).unwrap();

        let mut reloaded = ProductStore::new(storage);
        reloaded.fetch_all().unwrap();
        assert_eq!(reloaded.stock(&ProductId::new("p1")), 3);
    }
}
