//! Persisted cart container.

use luxe_cache::{Cache, Persisted};
use luxe_commerce::prelude::*;
use tracing::{debug, info};

/// Storage key for the cart.
pub const CART_STORAGE_KEY: &str = "jewellery-cart";

/// Cart container.
///
/// Every action goes through [`reduce`]; the new state is written back and
/// the summary recomputed.
pub struct CartStore {
    state: Persisted<CartState>,
    summary: CartSummary,
}

impl CartStore {
    /// Restore the cart from the cache.
    pub fn new(cache: Cache) -> Self {
        let state = Persisted::load(cache, CART_STORAGE_KEY, CartState::default());
        let summary = state.get().summary();
        Self { state, summary }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        self.state.get()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.state.get().items
    }

    /// Applied coupon.
    pub fn coupon(&self) -> Option<&Coupon> {
        self.state.get().coupon.as_ref()
    }

    /// Summary as of the last action.
    pub fn summary(&self) -> &CartSummary {
        &self.summary
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u64 {
        self.state.get().item_count()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.get().is_empty()
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "cart action");
        let next = reduce(self.state.get().clone(), action);
        self.summary = next.summary();
        self.state.set(next);
    }

    /// Add `quantity` of a product in the selected variant.
    pub fn add_product(&mut self, product: &Product, variant: VariantSelection, quantity: u32) {
        self.dispatch(CartAction::AddItem(CartItem::from_product(
            product, variant, quantity,
        )));
    }

    /// Remove the line with this identity.
    pub fn remove(&mut self, product_id: &ProductId, variant_key: &VariantKey) {
        self.dispatch(CartAction::RemoveItem {
            product_id: product_id.clone(),
            variant_key: variant_key.clone(),
        });
    }

    /// Set a line's quantity, clamped into `[1, max_quantity]`.
    pub fn update_quantity(&mut self, product_id: &ProductId, variant_key: &VariantKey, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.clone(),
            variant_key: variant_key.clone(),
            quantity,
        });
    }

    /// Drop all lines and the coupon.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Replace the coupon (`None` clears it).
    pub fn apply_coupon(&mut self, coupon: Option<Coupon>) {
        self.dispatch(CartAction::ApplyCoupon(coupon));
    }

    /// Look up a code and apply it.
    ///
    /// An unknown or expired code leaves the current coupon in place.
    pub fn apply_coupon_code(&mut self, book: &CouponBook, code: &str) -> Result<Coupon, CommerceError> {
        let coupon = book.lookup(code)?;
        info!(code = %coupon.code, "coupon applied");
        self.apply_coupon(Some(coupon.clone()));
        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_cache::MemoryStore;
    use std::sync::Arc;

    fn cache() -> Cache {
        Cache::new(Arc::new(MemoryStore::new()))
    }

    fn necklace() -> Product {
        serde_json::from_value(serde_json::json!({
            "id": "neck-1",
            "name": "Pearl Strand",
            "description": "Freshwater pearls",
            "price": 100.0,
            "salePrice": 80.0,
            "images": ["neck-1-front.jpg", "neck-1-back.jpg"],
            "category": "Necklaces",
            "brand": "Maison Perle",
            "rating": 4.5,
            "reviews": 12,
            "inStock": true,
            "stockQuantity": 5,
            "variants": { "size": ["16in", "18in"], "color": ["White"] }
        }))
        .unwrap()
    }

    fn white_18() -> VariantSelection {
        VariantSelection::new(Some("18in"), Some("White"))
    }

    #[test]
    fn test_add_product_merges_and_clamps() {
        let mut cart = CartStore::new(cache());
        cart.add_product(&necklace(), white_18(), 2);
        cart.add_product(&necklace(), white_18(), 1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].image, "neck-1-front.jpg");
        assert_eq!(cart.items()[0].max_quantity, 5);
        assert_eq!(cart.summary().subtotal, 240.0);

        cart.add_product(&necklace(), white_18(), 10);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_cart_survives_restart() {
        let cache = cache();
        let mut cart = CartStore::new(cache.clone());
        cart.add_product(&necklace(), white_18(), 2);

        let restored = CartStore::new(cache);
        assert_eq!(restored.state(), cart.state());
        assert_eq!(restored.summary(), cart.summary());
    }

    #[test]
    fn test_update_and_remove() {
        let mut cart = CartStore::new(cache());
        let product = necklace();
        cart.add_product(&product, white_18(), 2);
        let key = white_18().key();

        cart.update_quantity(&product.id, &key, 0);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.remove(&product.id, &VariantKey::from("White-16in"));
        assert_eq!(cart.items().len(), 1);

        cart.remove(&product.id, &key);
        assert!(cart.is_empty());
        assert_eq!(cart.summary(), &CartSummary::default());
    }

    #[test]
    fn test_apply_coupon_code() {
        let mut cart = CartStore::new(cache());
        let book = CouponBook::default();
        cart.add_product(&necklace(), white_18(), 2);

        let coupon = cart.apply_coupon_code(&book, "  luxe15 ").unwrap();
        assert_eq!(coupon.code, "LUXE15");
        assert!(cart.summary().has_discounts());

        let err = cart.apply_coupon_code(&book, "FREE").unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCouponCode(_)));
        assert_eq!(cart.coupon().map(|c| c.code.as_str()), Some("LUXE15"));
    }

    #[test]
    fn test_clear_drops_coupon() {
        let mut cart = CartStore::new(cache());
        cart.add_product(&necklace(), white_18(), 1);
        cart.apply_coupon(Some(Coupon::new("LUXE15", "15% off your order", 15.0)));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.coupon().is_none());
        assert_eq!(cart.item_count(), 0);
    }
}
