//! Persistent key-value mirror.
//!
//! A small synchronous string store that holds the slices of client state
//! that survive a restart. Values are JSON documents stored as strings under
//! the names in [`keys`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Mirror key names.
pub mod keys {
    /// Cart lines, as a JSON array.
    pub const CART_ITEMS: &str = "cartItems";
    /// Shipping address, as a JSON object.
    pub const SHIPPING_ADDRESS: &str = "shippingAddress";
    /// Payment method, as a JSON string.
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    /// Signed-in user: token plus profile fields.
    pub const USER_INFO: &str = "userInfo";

    /// Every key the mirror may hold.
    pub const ALL: [&str; 4] = [CART_ITEMS, SHIPPING_ADDRESS, PAYMENT_METHOD, USER_INFO];
}

/// Errors raised by a mirror backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Synchronous string key-value store.
///
/// Implementations must be safe to share between threads; individual
/// operations are atomic but there is no cross-key transaction.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode the JSON value under `key`.
///
/// # Errors
///
/// Returns an error if the backend fails or the stored value is not valid
/// JSON for `T`.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding or the backend write fails.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
