//! Persisted wishlist.

use luxe_cache::{Cache, Persisted};
use luxe_commerce::ProductId;
use tracing::debug;

/// Storage key for the wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "jewellery-wishlist";

/// Ordered set of saved product ids.
pub struct WishlistStore {
    ids: Persisted<Vec<ProductId>>,
}

impl WishlistStore {
    /// Restore the wishlist from the cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            ids: Persisted::load(cache, WISHLIST_STORAGE_KEY, Vec::new()),
        }
    }

    /// Saved ids, oldest first.
    pub fn ids(&self) -> &[ProductId] {
        self.ids.get()
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.ids.get().len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.ids.get().is_empty()
    }

    /// Check if a product is saved.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.get().contains(id)
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(&id) {
            return false;
        }
        debug!(product_id = %id, "wishlist add");
        self.ids.update(|ids| ids.push(id));
        true
    }

    /// Forget a product. Returns `false` if it was not saved.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        if !self.contains(id) {
            return false;
        }
        debug!(product_id = %id, "wishlist remove");
        self.ids.update(|ids| ids.retain(|i| i != id));
        true
    }

    /// Add if absent, remove if present. Returns whether the product is now saved.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id.clone())
        }
    }

    /// Forget every saved product; stores an empty list.
    pub fn clear(&mut self) {
        self.ids.set(Vec::new());
    }
}
