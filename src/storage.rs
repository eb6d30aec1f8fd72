//! Local Store Adapter
//!
//! Reads and writes JSON values in named key-value slots. Reads never fail:
//! an empty, unreadable, or malformed slot yields the caller's default.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Synchronous string key-value slots
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces any prior value under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }
}

/// Decode the slot, or return `default` if it is missing or malformed
pub fn read_json<T, S>(store: &S, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match try_read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            log::warn!("[STORAGE] Falling back to default for '{}': {}", key, e);
            default
        }
    }
}

fn try_read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StorageError::Deserialize(e.to_string())),
        _ => Ok(None),
    }
}

/// Serialize `value` into the slot (last write wins)
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_item(key, &text)
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::KeyValueStore;
    use crate::error::StorageError;

    /// In-memory slots; clones share the same map
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        slots: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
