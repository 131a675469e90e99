use serde_json::json;
use shopfront_core::{ProductId, ShippingAddress};
use shopfront_storefront::{Store, actions};

use super::{CommandError, print_json};

/// Print the cart together with what checking it out would cost.
pub fn show(store: &Store) -> Result<(), CommandError> {
    let cart = store.select(|state| state.cart.clone());
    print_json(&json!({
        "cart": cart,
        "prices": cart.prices(),
        "itemCount": cart.item_count(),
    }))
}

pub async fn add(store: &Store, id: i32, qty: u32) -> Result<(), CommandError> {
    actions::add_to_cart(store, ProductId::new(id), qty)
        .await
        .map_err(|e| CommandError::Failed(e.message()))?;
    show(store)
}

pub fn remove(store: &Store, id: i32) -> Result<(), CommandError> {
    actions::remove_from_cart(store, ProductId::new(id));
    show(store)
}

pub fn shipping(
    store: &Store,
    address: String,
    city: String,
    postal_code: String,
    country: String,
) -> Result<(), CommandError> {
    actions::save_shipping_address(
        store,
        ShippingAddress {
            address: Some(address),
            city: Some(city),
            postal_code: Some(postal_code),
            country: Some(country),
        },
    );
    show(store)
}

pub fn payment(store: &Store, method: String) -> Result<(), CommandError> {
    actions::save_payment_method(store, method);
    show(store)
}
