//! Product listing container.

use std::sync::Arc;

use luxe_commerce::prelude::*;
use luxe_data::ProductService;
use tracing::{info, warn};

/// Catalog plus the current filter and sort selection.
pub struct ProductStore {
    service: Arc<dyn ProductService>,
    products: Vec<Product>,
    filters: ProductFilters,
    sort: SortOption,
    is_loading: bool,
    error: Option<String>,
}

impl ProductStore {
    /// Create an empty store; call [`refresh`](Self::refresh) to load.
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self {
            service,
            products: Vec::new(),
            filters: ProductFilters::default(),
            sort: SortOption::default(),
            is_loading: false,
            error: None,
        }
    }

    /// All loaded products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Products matching the filters, in sort order.
    pub fn filtered(&self) -> Vec<&Product> {
        sort_products(&filter_products(&self.products, &self.filters), self.sort)
    }

    /// Reload the catalog.
    ///
    /// A failure keeps the previously loaded products and records the message.
    pub async fn refresh(&mut self) {
        self.is_loading = true;
        self.error = None;

        match self.service.get_products().await {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.products = products;
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.error = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    pub fn set_filters(&mut self, filters: ProductFilters) {
        self.filters = filters;
    }

    /// Modify the filters in place.
    pub fn update_filters<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ProductFilters),
    {
        f(&mut self.filters);
    }

    /// Replace only the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Back to no filters and the featured order.
    pub fn reset_filters(&mut self) {
        self.filters = ProductFilters::default();
        self.sort = SortOption::default();
    }

    /// Fetch a single product from the source.
    pub async fn product_by_id(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.service
            .get_product_by_id(id)
            .await?
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }
}
