//! Cart action creators. Only adding an item talks to the backend.

use shopfront_core::{CartLine, ProductId, ShippingAddress};
use tracing::instrument;

use crate::action::Action;
use crate::api::ApiError;
use crate::store::Store;

/// Fetch the product and put `qty` of it in the cart, replacing any line
/// for the same product.
///
/// # Errors
///
/// Returns the fetch error; nothing is dispatched in that case.
#[instrument(skip(store))]
pub async fn add_to_cart(store: &Store, id: ProductId, qty: u32) -> Result<(), ApiError> {
    let product = store.api().get_product(id).await?;
    store.dispatch(Action::CartAddItem(CartLine::from_product(&product, qty)));
    Ok(())
}

pub fn remove_from_cart(store: &Store, id: ProductId) {
    store.dispatch(Action::CartRemoveItem(id));
}

pub fn save_shipping_address(store: &Store, address: ShippingAddress) {
    store.dispatch(Action::CartSaveShippingAddress(address));
}

pub fn save_payment_method(store: &Store, method: impl Into<String>) {
    store.dispatch(Action::CartSavePaymentMethod(method.into()));
}
