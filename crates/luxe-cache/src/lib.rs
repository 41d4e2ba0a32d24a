//! Type-safe key-value persistence for the Luxe storefront.
//!
//! The storefront keeps its cart, auth and wishlist state under fixed keys
//! in a local key-value store. This crate provides:
//!
//! - [`KeyValueStore`]: the raw string store, with in-memory and file-backed
//!   implementations
//! - [`Cache`]: automatic JSON serialization on top of a store
//! - [`Persisted`]: a value mirrored to one key, whose storage failures never
//!   reach the caller
//!
//! # Example
//!
//! ```rust
//! use luxe_cache::{Cache, MemoryStore, Persisted};
//! use std::sync::Arc;
//!
//! let cache = Cache::new(Arc::new(MemoryStore::new()));
//!
//! let mut wishlist = Persisted::load(cache.clone(), "jewellery-wishlist", Vec::<String>::new());
//! wishlist.set(vec!["ring-1".to_string()]);
//!
//! let restored: Option<Vec<String>> = cache.get("jewellery-wishlist").unwrap();
//! assert_eq!(restored, Some(vec!["ring-1".to_string()]));
//! ```

mod error;
mod kv;
mod persisted;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use persisted::Persisted;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore, Persisted};
}
