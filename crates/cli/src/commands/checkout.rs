//! Checkout command.

use tracing::{info, warn};

use sdfm_core::OrderForm;
use sdfm_store::CartStore;
use sdfm_store::checkout::{country_matches, place_order};

use super::open_storage;

/// Validate the form and place the order, clearing the cart.
///
/// The country field is resolved through the same prefix matching the
/// storefront's autocomplete uses; an ambiguous or unknown prefix is
/// reported before validation runs.
///
/// # Errors
///
/// Returns an error for an empty cart, an unresolvable country, an invalid
/// form, or a storage failure.
pub fn place(
    name: String,
    email: String,
    address: String,
    city: String,
    country: String,
    zip_code: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::new(open_storage()?);
    cart.fetch()?;
    if cart.lines().is_empty() {
        return Err("cart is empty; nothing to check out".into());
    }

    let country = match country_matches(&country) {
        matches if matches.len() == 1 => (*matches.first().unwrap_or(&"")).to_string(),
        matches if matches.is_empty() => {
            return Err(format!("unknown country {country:?}").into());
        }
        matches => {
            for candidate in &matches {
                warn!(candidate, "Ambiguous country prefix");
            }
            return Err(format!("country {country:?} is ambiguous").into());
        }
    };

    let order = place_order(
        OrderForm {
            name,
            email,
            address,
            city,
            country,
            zip_code,
        },
        &mut cart,
    )?;

    info!(order_id = %order.id, total = %order.total, "Thank you for your order!");
    Ok(())
}
