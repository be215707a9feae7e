//! Persisted-state round trips over the on-disk blob storage.

#![allow(clippy::unwrap_used)]

use sdfm_core::{NewCartItem, ProductId, WishlistItem};
use sdfm_integration_tests::product;
use sdfm_store::storage::{LocalStorage, StorageBackend};
use sdfm_store::{CartStore, ProductStore, WishlistStore};

#[test]
fn test_catalog_round_trip_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path()).unwrap();

    let mut catalog = ProductStore::new(storage.clone());
    catalog.add(product("p1", 2)).unwrap();
    catalog.add(product("p2", 0)).unwrap();
    catalog.adjust_stock(&ProductId::new("p1"), -1).unwrap();

    let mut reloaded = ProductStore::new(storage);
    reloaded.fetch_all().unwrap();
    assert_eq!(reloaded.products(), catalog.products());
}

#[test]
fn test_cart_round_trip_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path()).unwrap();

    let mut catalog = ProductStore::new(storage.clone());
    catalog.add(product("p1", 5)).unwrap();

    let mut cart = CartStore::new(storage.clone());
    let item = NewCartItem::from(&product("p1", 5));
    cart.add(item.clone(), &catalog).unwrap();
    cart.add(item, &catalog).unwrap();

    let mut reloaded = CartStore::new(storage);
    reloaded.fetch().unwrap();
    assert_eq!(reloaded.lines(), cart.lines());
    assert_eq!(reloaded.total(), cart.total());
    assert_eq!(reloaded.count(), 2);
}

#[test]
fn test_wishlist_round_trip_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path()).unwrap();

    let mut wishlist = WishlistStore::new(storage.clone());
    wishlist.add(WishlistItem::from(&product("p1", 2))).unwrap();

    let mut reloaded = WishlistStore::new(storage);
    reloaded.fetch().unwrap();
    assert_eq!(reloaded.items(), wishlist.items());
}

#[test]
fn test_stores_write_independent_keys() {
    // Catalog, cart, and wishlist each own one blob; mutating one never
    // touches the others' keys.
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path()).unwrap();

    let mut catalog = ProductStore::new(storage.clone());
    catalog.add(product("p1", 5)).unwrap();

    assert!(storage.load("products").unwrap().is_some());
    assert!(storage.load("cart").unwrap().is_none());
    assert!(storage.load("wishlist").unwrap().is_none());
}

#[test]
fn test_blob_layout_is_plain_json_arrays() {
    // The persisted layout is the direct JSON encoding of the line/product
    // arrays, matching the original string-keyed storage format.
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path()).unwrap();

    let mut catalog = ProductStore::new(storage.clone());
    catalog.add(product("p1", 5)).unwrap();

    let blob = storage.load("products").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "p1");
    assert_eq!(rows[0]["stock"], 5);
}
