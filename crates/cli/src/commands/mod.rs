//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;

use sdfm_store::config::StoreConfig;
use sdfm_store::storage::LocalStorage;

/// Open the local blob storage from environment configuration.
pub fn open_storage() -> Result<LocalStorage, Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    Ok(LocalStorage::open(config.data_dir)?)
}
