//! Durable key-value backends for the session store.
//!
//! Storage access is fail-soft everywhere: a backend that cannot be reached
//! behaves like an empty one, and failed writes are reported to the caller
//! but never panic.

use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value storage for session credentials.
///
/// `read` returns `None` both on absence and on access failure; `write`
/// returns whether the value was actually persisted.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// In-memory storage used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        self.entries
            .lock()
            .map(|mut entries| {
                entries.insert(key.to_owned(), value.to_owned());
                true
            })
            .unwrap_or(false)
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// `localStorage`-backed storage. Requires a browser environment; any
/// missing window or storage access error reads as empty.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> bool {
        Self::local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
