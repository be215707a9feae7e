//! Catalog commands: list, add, remove, and hosted-catalog sync.

use rust_decimal::Decimal;
use tracing::{info, warn};

use sdfm_core::{Product, ProductId};
use sdfm_store::ProductStore;
use sdfm_store::config::StoreConfig;
use sdfm_store::remote::RemoteCatalog;

use super::open_storage;

/// List the catalog with stock counts.
///
/// # Errors
///
/// Returns an error if the persisted catalog cannot be loaded.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = ProductStore::new(open_storage()?);
    catalog.fetch_all()?;

    if catalog.products().is_empty() {
        info!("Catalog is empty");
        return Ok(());
    }
    for product in catalog.products() {
        info!(
            id = %product.id,
            name = %product.name,
            price = %product.price,
            stock = product.stock,
            "product"
        );
    }
    Ok(())
}

/// Add a product to the catalog.
///
/// # Errors
///
/// Returns an error if the price does not parse, validation fails, or
/// persisting fails.
pub fn add(
    id: &str,
    name: &str,
    price: &str,
    image: &str,
    hover_image: &str,
    stock: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let price: Decimal = price
        .parse()
        .map_err(|e| format!("invalid price {price:?}: {e}"))?;

    let mut catalog = ProductStore::new(open_storage()?);
    catalog.fetch_all()?;
    catalog.add(Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        image: image.to_string(),
        hover_image: hover_image.to_string(),
        stock,
    })?;
    info!(id, "Product added");
    Ok(())
}

/// Remove a product by id.
///
/// # Errors
///
/// Returns an error if the persisted catalog cannot be loaded or saved.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut catalog = ProductStore::new(open_storage()?);
    catalog.fetch_all()?;
    catalog.remove(&ProductId::new(id))?;
    Ok(())
}

/// Replace the local catalog with the hosted one.
///
/// An empty hosted table empties the local catalog too; the pull always
/// persists what it fetched.
///
/// # Errors
///
/// Returns an error if the remote service is not configured or the fetch
/// fails; the local catalog is untouched on failure.
pub async fn pull() -> Result<(), Box<dyn std::error::Error>> {
    let remote = remote_client()?;
    let products = remote.fetch_all().await?;
    info!(count = products.len(), "Fetched hosted catalog");

    let mut catalog = ProductStore::new(open_storage()?);
    catalog.replace_all(products)?;
    Ok(())
}

/// Upsert every local product into the hosted catalog.
///
/// # Errors
///
/// Returns an error if the remote service is not configured or an upsert
/// fails; rows already pushed stay pushed.
pub async fn push() -> Result<(), Box<dyn std::error::Error>> {
    let remote = remote_client()?;
    let mut catalog = ProductStore::new(open_storage()?);
    catalog.fetch_all()?;

    if catalog.products().is_empty() {
        warn!("Nothing to push: local catalog is empty");
        return Ok(());
    }
    for product in catalog.products() {
        remote.upsert(product).await?;
    }
    info!(count = catalog.products().len(), "Pushed catalog");
    Ok(())
}

fn remote_client() -> Result<RemoteCatalog, Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let remote = config
        .remote
        .ok_or("SDFM_SERVICE_URL not set; hosted catalog is not configured")?;
    Ok(RemoteCatalog::new(&remote.endpoint, &remote.api_key)?)
}
