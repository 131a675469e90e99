//! Mirroring state into the key-value store, and reading it back.
//!
//! | Action | Mirror effect |
//! |---|---|
//! | `CART_ADD_ITEM`, `CART_REMOVE_ITEM` | write `cartItems` |
//! | `CART_SAVE_SHIPPING_ADDRESS` | write `shippingAddress` |
//! | `CART_SAVE_PAYMENT_METHOD` | write `paymentMethod` |
//! | `CART_CLEAR_ITEMS` | remove `cartItems` |
//! | `USER_LOGIN_SUCCESS` | write `userInfo` |
//! | `USER_LOGOUT` | remove `userInfo` |
//!
//! Storage failures never reach the dispatcher; they are logged and dropped.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shopfront_core::{CartLine, ShippingAddress, UserInfo};
use tracing::warn;

use crate::action::Action;
use crate::state::AppState;
use crate::storage::{KeyValueStore, StorageError, keys, read_json, write_json};
use crate::store::Subscriber;

/// Writes the mirrored keys after each committed transition.
pub struct PersistenceSubscriber {
    mirror: Arc<dyn KeyValueStore>,
}

impl PersistenceSubscriber {
    #[must_use]
    pub fn new(mirror: Arc<dyn KeyValueStore>) -> Self {
        Self { mirror }
    }

    fn persist(&self, action: &Action, state: &AppState) -> Result<(), StorageError> {
        let mirror = self.mirror.as_ref();
        match action {
            Action::CartAddItem(_) | Action::CartRemoveItem(_) => {
                write_json(mirror, keys::CART_ITEMS, &state.cart.cart_items)
            }
            Action::CartSaveShippingAddress(address) => {
                write_json(mirror, keys::SHIPPING_ADDRESS, address)
            }
            Action::CartSavePaymentMethod(method) => {
                write_json(mirror, keys::PAYMENT_METHOD, method)
            }
            Action::CartClearItems => mirror.remove(keys::CART_ITEMS),
            Action::UserLoginSuccess(info) => write_json(mirror, keys::USER_INFO, info),
            Action::UserLogout => mirror.remove(keys::USER_INFO),
            _ => Ok(()),
        }
    }
}

impl Subscriber for PersistenceSubscriber {
    fn notify(&self, action: &Action, state: &AppState) {
        if let Err(e) = self.persist(action, state) {
            warn!(action = action.kind(), error = %e, "Failed to update storage");
        }
    }
}

/// Fill the mirrored slices of `state` from `mirror`.
///
/// Keys that are missing leave the slice as it is. Keys that cannot be read
/// or decoded are logged and skipped.
pub fn hydrate(mirror: &dyn KeyValueStore, state: &mut AppState) {
    if let Some(items) = load::<Vec<CartLine>>(mirror, keys::CART_ITEMS) {
        state.cart.cart_items = items;
    }
    if let Some(address) = load::<ShippingAddress>(mirror, keys::SHIPPING_ADDRESS) {
        state.cart.shipping_address = address;
    }
    if let Some(method) = load::<String>(mirror, keys::PAYMENT_METHOD) {
        state.cart.payment_method = Some(method);
    }
    if let Some(info) = load::<UserInfo>(mirror, keys::USER_INFO) {
        state.user_login.user_info = Some(info);
    }
}

fn load<T: DeserializeOwned>(mirror: &dyn KeyValueStore, key: &str) -> Option<T> {
    match read_json(mirror, key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Ignoring unreadable stored value");
            None
        }
    }
}
