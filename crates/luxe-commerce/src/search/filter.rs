//! Product filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds on the effective price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound, `None` for unbounded.
    pub max: Option<f64>,
}

impl PriceRange {
    /// Create a bounded range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    /// Create a range with no upper bound.
    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Check if a price is within the range.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::at_least(0.0)
    }
}

/// Product listing filters.
///
/// Categories and brands match if the product is in any selected value;
/// tags match only if the product carries every selected tag. Empty fields
/// match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price_range: PriceRange,
    /// Minimum rating.
    pub rating: Option<f64>,
    pub in_stock_only: bool,
    /// Free-text query against name and description.
    pub query: String,
    pub tags: Vec<String>,
}

impl ProductFilters {
    /// Filters that match every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to any of these categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to any of these brands.
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict effective price to `range`.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Require at least this rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Hide out-of-stock products.
    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Set the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Require every one of these tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_normalized(product, &self.normalized_query())
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    fn matches_normalized(&self, product: &Product, query: &str) -> bool {
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let matches_brand = self.brands.is_empty() || self.brands.contains(&product.brand);
        let matches_price = self.price_range.contains(product.effective_price());
        let matches_rating = self.rating.map_or(true, |min| product.rating >= min);
        let matches_stock = !self.in_stock_only || product.in_stock;
        let matches_query = query.is_empty()
            || product.name.to_lowercase().contains(query)
            || product.description.to_lowercase().contains(query);
        let matches_tags = self.tags.iter().all(|tag| product.has_tag(tag));

        matches_category
            && matches_brand
            && matches_price
            && matches_rating
            && matches_stock
            && matches_query
            && matches_tags
    }
}

/// Filter products, preserving their relative order.
pub fn filter_products<'a>(products: &'a [Product], filters: &ProductFilters) -> Vec<&'a Product> {
    let query = filters.normalized_query();
    products
        .iter()
        .filter(|p| filters.matches_normalized(p, &query))
        .collect()
}
