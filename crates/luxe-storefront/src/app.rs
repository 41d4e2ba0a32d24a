//! Storefront composition.

use std::sync::Arc;

use anyhow::{Context, Result};
use luxe_auth::{AuthService, AuthStore, MockAuthService};
use luxe_cache::{Cache, FileStore, KeyValueStore, MemoryStore};
use luxe_commerce::prelude::*;
use luxe_data::{MockProductService, ProductService, SimulatedLatency};
use tracing::info;

use crate::cart::CartStore;
use crate::checkout::{Checkout, CheckoutForm, OrderConfirmation};
use crate::config::{StorageConfig, StorefrontConfig};
use crate::products::ProductStore;
use crate::search::SearchBox;
use crate::wishlist::WishlistStore;

/// One shopper session: every state container wired to shared storage.
pub struct Storefront {
    pub cart: CartStore,
    pub auth: AuthStore,
    pub wishlist: WishlistStore,
    pub products: ProductStore,
    pub search: SearchBox,
    pub coupons: CouponBook,
    checkout: Checkout,
}

impl Storefront {
    /// Wire containers around injected storage and services.
    pub fn new(
        config: &StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        product_service: Arc<dyn ProductService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        let cache = Cache::new(store);
        let products = ProductStore::new(product_service);
        let mut search = SearchBox::new(config.timings.search_debounce());
        search.sync(&products.filters().query);

        Self {
            cart: CartStore::new(cache.clone()),
            auth: AuthStore::new(cache.clone(), auth_service),
            wishlist: WishlistStore::new(cache),
            products,
            search,
            coupons: CouponBook::default(),
            checkout: Checkout::new(config.timings.checkout_delay()),
        }
    }

    /// Build a storefront backed by the configured storage and the mock services.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage {
            StorageConfig::Memory => Arc::new(MemoryStore::new()),
            StorageConfig::File { dir } => Arc::new(
                FileStore::open(dir)
                    .with_context(|| format!("Failed to open state directory: {}", dir.display()))?,
            ),
        };

        let latency = SimulatedLatency::new(config.timings.network_latency());
        let products = MockProductService::builtin()
            .context("Failed to load built-in catalog")?
            .with_latency(latency);
        let auth = MockAuthService::builtin().with_latency(latency);

        info!(storage = ?config.storage, "storefront ready");
        Ok(Self::new(config, store, Arc::new(products), Arc::new(auth)))
    }

    /// Add a catalog product to the cart by id.
    pub async fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        variant: VariantSelection,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        let product = self.products.product_by_id(product_id).await?;
        self.cart.add_product(&product, variant, quantity);
        Ok(())
    }

    /// Apply a coupon code from the storefront's coupon book.
    pub fn apply_coupon_code(&mut self, code: &str) -> Result<Coupon, CommerceError> {
        self.cart.apply_coupon_code(&self.coupons, code)
    }

    /// Wait for the next debounced search query that changes the listing.
    pub async fn next_search(&mut self) -> Option<String> {
        loop {
            let query = self.search.next_query().await?;
            if let Some(query) = self.apply_query(query) {
                return Some(query);
            }
        }
    }

    /// Apply any settled search query without waiting.
    pub fn poll_search(&mut self) -> Option<String> {
        while let Some(query) = self.search.try_next_query() {
            if let Some(query) = self.apply_query(query) {
                return Some(query);
            }
        }
        None
    }

    /// Apply the search box text immediately.
    pub fn submit_search(&mut self) -> String {
        let query = self.search.submit();
        self.products.set_query(query.clone());
        query
    }

    /// Replace the listing filters and show their query in the search box.
    pub fn set_filters(&mut self, filters: ProductFilters) {
        self.products.set_filters(filters);
        self.search.sync(&self.products.filters().query);
    }

    /// Modify the listing filters and show their query in the search box.
    pub fn update_filters<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ProductFilters),
    {
        self.products.update_filters(f);
        self.search.sync(&self.products.filters().query);
    }

    /// Clear filters, sort and the search box.
    pub fn reset_filters(&mut self) {
        self.products.reset_filters();
        self.search.reset();
    }

    /// Leave the listing: drop pending search input.
    pub fn leave_listing(&mut self) {
        self.search.cancel();
    }

    /// Place an order for the current cart.
    pub async fn checkout(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, CommerceError> {
        self.checkout.place_order(&mut self.cart, form).await
    }

    /// Set the listing query unless it already holds `query`.
    fn apply_query(&mut self, query: String) -> Option<String> {
        if self.products.filters().query == query {
            return None;
        }
        self.products.set_query(query.clone());
        Some(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_from_config_memory() {
        let mut storefront = Storefront::from_config(&StorefrontConfig::instant()).unwrap();
        assert!(storefront.cart.is_empty());
        assert!(!storefront.auth.is_authenticated());

        storefront.products.refresh().await;
        assert_eq!(storefront.products.products().len(), 10);
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product() {
        let mut storefront = Storefront::from_config(&StorefrontConfig::instant()).unwrap();
        let err = storefront
            .add_to_cart(&ProductId::new("prod-404"), VariantSelection::default(), 1)
            .await
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("prod-404".to_string()));
        assert!(storefront.cart.is_empty());
    }

    #[tokio::test]
    async fn test_submit_search_filters_listing() {
        let mut storefront = Storefront::from_config(&StorefrontConfig::instant()).unwrap();
        storefront.products.refresh().await;

        storefront.search.input("  Tennis ");
        assert_eq!(storefront.submit_search(), "Tennis");
        assert_eq!(storefront.products.filters().query, "Tennis");
        assert_eq!(storefront.products.filtered().len(), 1);

        storefront.reset_filters();
        assert_eq!(storefront.search.text(), "");
        assert_eq!(storefront.products.filtered().len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retyped_query_applies_after_filters_replaced() {
        let mut storefront = Storefront::from_config(&StorefrontConfig::instant()).unwrap();
        storefront.products.refresh().await;

        storefront.search.input("tennis");
        assert_eq!(storefront.next_search().await, Some("tennis".to_string()));

        storefront.set_filters(ProductFilters::default());
        assert_eq!(storefront.search.text(), "");
        assert_eq!(storefront.products.filtered().len(), 10);

        storefront.search.input("tennis");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(storefront.poll_search(), Some("tennis".to_string()));
        assert_eq!(storefront.products.filters().query, "tennis");
        assert_eq!(storefront.products.filtered().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_matching_listing_is_skipped() {
        let mut storefront = Storefront::from_config(&StorefrontConfig::instant()).unwrap();
        storefront.update_filters(|f| f.query = "pearl".to_string());
        assert_eq!(storefront.search.text(), "pearl");

        storefront.search.input("pearl");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(storefront.poll_search(), None);

        storefront.search.input("pearls");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(storefront.poll_search(), Some("pearls".to_string()));
    }
}
