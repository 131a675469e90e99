use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{KeyValueStore, StorageError};

/// In-memory mirror.
///
/// Clones share the same map, so a test can keep one handle to inspect what
/// the store wrote through another. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("userInfo", r#"{"token":"t1"}"#).unwrap();
        assert_eq!(
            store.get("userInfo").unwrap().as_deref(),
            Some(r#"{"token":"t1"}"#)
        );

        store.remove("userInfo").unwrap();
        assert_eq!(store.get("userInfo").unwrap(), None);
        // Removing again is fine
        store.remove("userInfo").unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set("paymentMethod", "\"PayPal\"").unwrap();
        assert_eq!(observer.len(), 1);
    }
}
