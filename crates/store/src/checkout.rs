//! Checkout: order form validation and submission.
//!
//! Submitting an order clears the cart through [`CartStore::clear`], which
//! by policy yields no stock deltas - purchased units were already reserved
//! when they entered the cart. Checkout does NOT re-validate lines against
//! the current catalog, so a product deleted after being carted is still
//! ordered at its carted price.

use chrono::Utc;
use sdfm_core::{Order, OrderForm};
use tracing::info;
use uuid::Uuid;

use crate::cart::CartStore;
use crate::error::{Result, StoreError};

/// Countries offered by the checkout form's autocomplete.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Antigua and Barbuda",
    "Argentina", "Armenia", "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain",
    "Bangladesh", "Barbados", "Belarus", "Belgium", "Belize", "Benin", "Bhutan",
    "Bolivia", "Bosnia and Herzegovina", "Botswana", "Brazil", "Brunei", "Bulgaria",
    "Burkina Faso", "Burundi", "Cabo Verde", "Cambodia", "Cameroon", "Canada",
    "Central African Republic", "Chad", "Chile", "China", "Colombia", "Comoros",
    "Congo, Democratic Republic of the", "Congo, Republic of the", "Costa Rica",
    "Côte d'Ivoire", "Croatia", "Cuba", "Cyprus", "Czech Republic", "Denmark",
    "Djibouti", "Dominica", "Dominican Republic", "Ecuador", "Egypt", "El Salvador",
    "Equatorial Guinea", "Eritrea", "Estonia", "Eswatini", "Ethiopia", "Fiji",
    "Finland", "France", "Gabon", "Gambia", "Georgia", "Germany", "Ghana",
    "Greece", "Grenada", "Guatemala", "Guinea", "Guinea-Bissau", "Guyana", "Haiti",
    "Honduras", "Hungary", "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland",
    "Israel", "Italy", "Jamaica", "Japan", "Jordan", "Kazakhstan", "Kenya", "Kiribati",
    "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho", "Liberia", "Libya",
    "Liechtenstein", "Lithuania", "Luxembourg", "Madagascar", "Malawi", "Malaysia",
    "Maldives", "Mali", "Malta", "Mexico", "Moldova", "Monaco", "Mongolia", "Montenegro",
    "Morocco", "Mozambique", "Myanmar", "Namibia", "Nepal", "Netherlands", "New Zealand",
    "Nicaragua", "Niger", "Nigeria", "North Macedonia", "Norway", "Oman", "Pakistan",
    "Panama", "Papua New Guinea", "Paraguay", "Peru", "Philippines", "Poland", "Portugal",
    "Qatar", "Romania", "Russia", "Rwanda", "Saudi Arabia", "Senegal", "Serbia",
    "Seychelles", "Sierra Leone", "Singapore", "Slovakia", "Slovenia", "South Africa",
    "Spain", "Sri Lanka", "Sudan", "Sweden", "Switzerland", "Syria", "Tanzania",
    "Thailand", "Togo", "Trinidad and Tobago", "Tunisia", "Turkey", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States of America", "Uruguay",
    "Uzbekistan", "Venezuela", "Vietnam", "Zambia", "Zimbabwe",
];

/// Case-insensitive prefix match over [`COUNTRIES`].
///
/// An empty prefix yields no suggestions - the form only autocompletes once
/// the shopper starts typing.
#[must_use]
pub fn country_matches(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let prefix = prefix.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&prefix))
        .copied()
        .collect()
}

/// Validate a completed order form.
///
/// # Errors
///
/// Returns [`StoreError::Validation`] naming the first missing or invalid
/// field.
pub fn validate_form(form: &OrderForm) -> Result<()> {
    let required = [
        ("name", &form.name),
        ("email", &form.email),
        ("address", &form.address),
        ("city", &form.city),
        ("country", &form.country),
        ("zip code", &form.zip_code),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(StoreError::Validation(format!("{field} is required")));
        }
    }
    let email = form.email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(StoreError::Validation("email address is invalid".into()));
    }
    Ok(())
}

/// Validate the form, snapshot the cart total, clear the cart, and return
/// the placed order.
///
/// # Errors
///
/// Returns a validation error for an incomplete form, or a storage error if
/// clearing the cart fails (the order is not produced in that case).
pub fn place_order(form: OrderForm, cart: &mut CartStore) -> Result<Order> {
    validate_form(&form)?;
    let total = cart.total();
    cart.clear()?;
    let order = Order {
        id: Uuid::new_v4(),
        details: form,
        total,
        placed_at: Utc::now(),
    };
    info!(order_id = %order.id, total = %order.total, "Order submitted");
    Ok(order)
}
