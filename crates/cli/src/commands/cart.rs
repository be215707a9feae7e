//! Cart commands.
//!
//! Every mutation runs the same two-phase update the storefront UI uses:
//! the cart computes its stock deltas, then a reconciliation pass applies
//! them to the catalog before anything is reported back.

use tracing::{info, warn};

use sdfm_core::{NewCartItem, ProductId};
use sdfm_store::{CartStore, DeltaQueue, ProductStore};

use super::open_storage;

fn load_stores() -> Result<(ProductStore, CartStore), Box<dyn std::error::Error>> {
    let storage = open_storage()?;
    let mut catalog = ProductStore::new(storage.clone());
    catalog.fetch_all()?;
    let mut cart = CartStore::new(storage);
    cart.fetch()?;
    Ok((catalog, cart))
}

/// Show cart lines and totals.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let (_, cart) = load_stores()?;
    if cart.lines().is_empty() {
        info!("Cart is empty");
        return Ok(());
    }
    for line in cart.lines() {
        info!(
            id = %line.product_id,
            name = %line.name,
            quantity = line.quantity,
            subtotal = %line.subtotal(),
            "line"
        );
    }
    info!(total = %cart.total(), items = cart.count(), "Cart totals");
    Ok(())
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn add(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (mut catalog, mut cart) = load_stores()?;
    let id = ProductId::new(id);
    let Some(product) = catalog.get(&id) else {
        warn!(%id, "Product not in catalog");
        return Ok(());
    };

    let before = cart.count();
    let deltas = cart.add(NewCartItem::from(product), &catalog)?;
    let mut queue = DeltaQueue::new();
    queue.push_all(deltas);
    queue.reconcile(&mut catalog)?;

    if cart.count() > before {
        info!(%id, stock = catalog.stock(&id), "Added to cart");
    } else {
        warn!(%id, "Out of stock");
    }
    Ok(())
}

/// Remove a line entirely, returning its quantity to stock.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (mut catalog, mut cart) = load_stores()?;
    let id = ProductId::new(id);

    let deltas = cart.remove(&id)?;
    let mut queue = DeltaQueue::new();
    queue.push_all(deltas);
    queue.reconcile(&mut catalog)?;

    info!(%id, stock = catalog.stock(&id), "Removed from cart");
    Ok(())
}

/// Set a line's quantity.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn set_quantity(id: &str, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let (mut catalog, mut cart) = load_stores()?;
    let id = ProductId::new(id);

    let deltas = cart.update_quantity(&id, quantity, &catalog)?;
    if deltas.is_empty() {
        warn!(%id, quantity, "Quantity unchanged");
        return Ok(());
    }
    let mut queue = DeltaQueue::new();
    queue.push_all(deltas);
    queue.reconcile(&mut catalog)?;

    info!(%id, quantity, stock = catalog.stock(&id), "Quantity updated");
    Ok(())
}

/// Empty the cart. Reserved stock is NOT returned (storefront policy).
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut cart) = load_stores()?;
    cart.clear()?;
    info!("Cart cleared");
    Ok(())
}
