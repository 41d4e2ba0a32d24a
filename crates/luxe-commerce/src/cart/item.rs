//! Cart line items.

use crate::catalog::{Product, VariantKey, VariantSelection};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Display fields are copied from the product at add time so the cart can be
/// rendered without the catalog. Identity is `(product_id, variant key)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Regular unit price.
    pub price: f64,
    /// Sale unit price, if the product was on sale when added.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Primary image.
    pub image: String,
    /// Quantity, always within `[1, max_quantity]`.
    pub quantity: u32,
    /// Selected options.
    #[serde(default)]
    pub variant: VariantSelection,
    /// Stock quantity of the product when the line was added.
    pub max_quantity: u32,
}

impl CartItem {
    /// Build a line from a catalog product.
    pub fn from_product(product: &Product, variant: VariantSelection, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            sale_price: product.sale_price,
            image: product.primary_image().unwrap_or_default().to_string(),
            quantity,
            variant,
            max_quantity: product.stock_quantity,
        }
    }

    /// Identity key of the selected variant.
    pub fn variant_key(&self) -> VariantKey {
        self.variant.key()
    }

    /// Check whether this line is identified by `(product_id, key)`.
    pub fn matches(&self, product_id: &ProductId, key: &VariantKey) -> bool {
        &self.product_id == product_id && &self.variant_key() == key
    }

    /// Unit price actually charged.
    pub fn unit_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// Clamp a requested quantity into `[1, max_quantity]`.
///
/// The lower bound wins when `max_quantity` is zero.
pub fn clamp_quantity(requested: i64, max_quantity: u32) -> u32 {
    requested.min(i64::from(max_quantity)).max(1) as u32
}
