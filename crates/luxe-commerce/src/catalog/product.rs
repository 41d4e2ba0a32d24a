//! Product types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Variant option lists offered for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductVariants {
    /// Available sizes (e.g., ring sizes, chain lengths).
    #[serde(default)]
    pub size: Vec<String>,
    /// Available colors / metals.
    #[serde(default)]
    pub color: Vec<String>,
}

/// A product in the catalog.
///
/// Products are immutable once loaded from the product source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Regular price.
    pub price: f64,
    /// Sale price, when the product is discounted.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category name (e.g., "Rings").
    pub category: String,
    /// Brand name.
    pub brand: String,
    /// Average rating (0.0 - 5.0).
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Units available.
    pub stock_quantity: u32,
    /// Variant option lists.
    #[serde(default)]
    pub variants: ProductVariants,
    /// Free-form tags for filtering.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Creation timestamp as provided by the source (ISO-8601 when valid).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// The price a customer actually pays: the sale price if present,
    /// otherwise the regular price.
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check if the product carries a tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .map(|tags| tags.iter().any(|t| t == tag))
            .unwrap_or(false)
    }

    /// Creation time in milliseconds since the Unix epoch.
    ///
    /// Missing or unparseable timestamps map to `0`, so they sort as oldest.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp_millis)
            .unwrap_or(0)
    }
}

/// Parse an RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as UTC midnight.
fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
