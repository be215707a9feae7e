//! End-to-end cart/stock reconciliation scenarios.
//!
//! These drive a cart and a catalog through the same two-phase update the
//! storefront UI performs: cart mutation first, then a reconciliation pass
//! applying the returned deltas to the product store.

#![allow(clippy::unwrap_used)]

use sdfm_core::{NewCartItem, ProductId};
use sdfm_integration_tests::product;
use sdfm_store::storage::MemoryStorage;
use sdfm_store::{CartStore, DeltaQueue, ProductStore};

struct Shop {
    catalog: ProductStore,
    cart: CartStore,
    queue: DeltaQueue,
}

impl Shop {
    fn with_stock(stock: u32) -> Self {
        let mut catalog = ProductStore::new(MemoryStorage::shared());
        catalog.add(product("p1", stock)).unwrap();
        Self {
            catalog,
            cart: CartStore::new(MemoryStorage::shared()),
            queue: DeltaQueue::new(),
        }
    }

    /// One UI interaction: mutate the cart, then reconcile.
    fn add(&mut self) {
        let item = NewCartItem::from(&product("p1", 0));
        let deltas = self.cart.add(item, &self.catalog).unwrap();
        self.queue.push_all(deltas);
        self.queue.reconcile(&mut self.catalog).unwrap();
    }

    fn remove(&mut self) {
        let deltas = self.cart.remove(&ProductId::new("p1")).unwrap();
        self.queue.push_all(deltas);
        self.queue.reconcile(&mut self.catalog).unwrap();
    }

    fn set_quantity(&mut self, quantity: u32) {
        let deltas = self
            .cart
            .update_quantity(&ProductId::new("p1"), quantity, &self.catalog)
            .unwrap();
        self.queue.push_all(deltas);
        self.queue.reconcile(&mut self.catalog).unwrap();
    }

    fn stock(&self) -> u32 {
        self.catalog.stock(&ProductId::new("p1"))
    }
}

// =============================================================================
// Spec Scenarios
// =============================================================================

#[test]
fn test_double_add_drains_stock_then_third_add_is_noop() {
    let mut shop = Shop::with_stock(2);

    shop.add();
    shop.add();
    assert_eq!(shop.cart.lines().len(), 1);
    assert_eq!(shop.cart.lines()[0].quantity, 2);
    assert_eq!(shop.stock(), 0);

    // Stock is exhausted; a third add changes nothing.
    shop.add();
    assert_eq!(shop.cart.lines()[0].quantity, 2);
    assert_eq!(shop.stock(), 0);
}

#[test]
fn test_remove_returns_stock_and_empties_cart() {
    let mut shop = Shop::with_stock(2);
    shop.add();
    shop.add();

    shop.remove();
    assert!(shop.cart.lines().is_empty());
    assert_eq!(shop.stock(), 2);
}

#[test]
fn test_update_to_zero_returns_full_quantity_through_queue() {
    let mut shop = Shop::with_stock(3);
    shop.add();
    shop.add();
    assert_eq!(shop.stock(), 1);

    shop.set_quantity(0);
    assert!(shop.cart.lines().is_empty());
    assert_eq!(shop.stock(), 3);
}

#[test]
fn test_update_above_stock_is_rejected() {
    let mut shop = Shop::with_stock(2);
    shop.add();
    assert_eq!(shop.stock(), 1);

    // Only 1 unit left on the shelf; asking for 5 is refused outright.
    shop.set_quantity(5);
    assert_eq!(shop.cart.lines()[0].quantity, 1);
    assert_eq!(shop.stock(), 1);
}

#[test]
fn test_add_with_zero_stock_leaves_everything_unchanged() {
    let mut shop = Shop::with_stock(0);
    shop.add();
    assert!(shop.cart.lines().is_empty());
    assert_eq!(shop.stock(), 0);
}

#[test]
fn test_interleaved_operations_keep_cart_and_stock_consistent() {
    let mut shop = Shop::with_stock(5);
    shop.add(); // cart 1, stock 4
    shop.set_quantity(4); // cart 4, stock 1
    shop.add(); // cart 5, stock 0
    assert_eq!(shop.cart.count(), 5);
    assert_eq!(shop.stock(), 0);

    shop.set_quantity(2); // cart 2, stock 3
    assert_eq!(shop.cart.count(), 2);
    assert_eq!(shop.stock(), 3);

    shop.remove(); // cart 0, stock 5
    assert_eq!(shop.cart.count(), 0);
    assert_eq!(shop.stock(), 5);
}

#[test]
fn test_clear_loses_reserved_stock() {
    // Documented storefront policy: clearing the cart does not reconcile.
    let mut shop = Shop::with_stock(2);
    shop.add();
    shop.add();
    shop.cart.clear().unwrap();

    assert!(shop.cart.lines().is_empty());
    assert_eq!(shop.stock(), 0);
}

#[test]
fn test_deleted_product_line_survives_in_cart() {
    // Soft reference: removing the product from the catalog leaves the
    // cart line behind, and its stock lookups fall back to zero.
    let mut shop = Shop::with_stock(2);
    shop.add();
    shop.catalog.remove(&ProductId::new("p1")).unwrap();

    assert_eq!(shop.cart.lines().len(), 1);
    assert_eq!(shop.stock(), 0);

    // Further adds are silently rejected against the missing product.
    shop.add();
    assert_eq!(shop.cart.lines()[0].quantity, 1);
}
