//! A value mirrored to a single cache key.

use crate::Cache;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// A value kept in memory and written through to one key.
///
/// Loading falls back to the initial value when the key is missing or the
/// stored value cannot be read. Write failures are logged and otherwise
/// ignored: the in-memory value stays authoritative for the session.
///
/// # Example
///
/// ```rust
/// use luxe_cache::{Cache, MemoryStore, Persisted};
/// use std::sync::Arc;
///
/// let cache = Cache::new(Arc::new(MemoryStore::new()));
/// let mut count = Persisted::load(cache, "visits", 0u32);
///
/// count.update(|n| *n += 1);
/// assert_eq!(*count.get(), 1);
///
/// count.remove();
/// assert_eq!(*count.get(), 0);
/// ```
#[derive(Debug)]
pub struct Persisted<T> {
    cache: Cache,
    key: String,
    initial: T,
    value: T,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Read `key`, falling back to `initial`.
    ///
    /// Nothing is written during load.
    pub fn load(cache: Cache, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match cache.get::<T>(&key) {
            Ok(Some(value)) => {
                debug!(key = %key, "restored persisted value");
                value
            }
            Ok(None) => initial.clone(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding unreadable persisted value");
                initial.clone()
            }
        };

        Self {
            cache,
            key,
            initial,
            value,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the value and write it through.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.write();
    }

    /// Modify the value in place and write it through.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.write();
    }

    /// Delete the stored entry and reset to the initial value.
    pub fn remove(&mut self) {
        if let Err(e) = self.cache.delete(&self.key) {
            warn!(key = %self.key, error = %e, "failed to delete persisted value");
        }
        self.value = self.initial.clone();
    }

    fn write(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.value) {
            warn!(key = %self.key, error = %e, "failed to persist value");
        }
    }
}
