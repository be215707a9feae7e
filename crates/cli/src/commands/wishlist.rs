//! Wishlist commands.

use tracing::{info, warn};

use sdfm_core::{ProductId, WishlistItem};
use sdfm_store::{ProductStore, WishlistStore};

use super::open_storage;

fn load() -> Result<WishlistStore, Box<dyn std::error::Error>> {
    let mut wishlist = WishlistStore::new(open_storage()?);
    wishlist.fetch()?;
    Ok(wishlist)
}

/// Show saved items.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let wishlist = load()?;
    if wishlist.items().is_empty() {
        info!("Wishlist is empty");
        return Ok(());
    }
    for item in wishlist.items() {
        info!(id = %item.id, name = %item.name, price = %item.price, "item");
    }
    Ok(())
}

/// Save a catalog product to the wishlist.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn add(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = ProductStore::new(open_storage()?);
    catalog.fetch_all()?;
    let id = ProductId::new(id);
    let Some(product) = catalog.get(&id) else {
        warn!(%id, "Product not in catalog");
        return Ok(());
    };

    let mut wishlist = load()?;
    wishlist.add(WishlistItem::from(product))?;
    Ok(())
}

/// Remove a saved product.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut wishlist = load()?;
    wishlist.remove(&ProductId::new(id))?;
    Ok(())
}

/// Empty the wishlist.
///
/// # Errors
///
/// Returns an error if persisted state cannot be loaded or saved.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let mut wishlist = load()?;
    wishlist.clear()?;
    info!("Wishlist cleared");
    Ok(())
}
