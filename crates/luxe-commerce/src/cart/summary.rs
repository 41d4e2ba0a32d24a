//! Cart summary calculations.

use crate::cart::{CartItem, Coupon};
use serde::{Deserialize, Serialize};

/// Sales tax rate applied after discounts.
pub const TAX_RATE: f64 = 0.07;

/// Pricing breakdown for a cart.
///
/// Values are unrounded; currency formatting belongs to the presentation layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of effective unit price times quantity.
    pub subtotal: f64,
    /// Coupon discount.
    pub discounts: f64,
    /// Tax on the discounted subtotal.
    pub tax: f64,
    /// Final total (subtotal - discounts + tax).
    pub total: f64,
}

impl CartSummary {
    /// Calculate the summary for a list of lines and an optional coupon.
    pub fn calculate(items: &[CartItem], coupon: Option<&Coupon>) -> Self {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let discounts = coupon
            .map(|c| subtotal * (c.discount_percentage / 100.0))
            .unwrap_or(0.0);
        let tax = (subtotal - discounts) * TAX_RATE;
        let total = subtotal - discounts + tax;

        Self {
            subtotal,
            discounts,
            tax,
            total,
        }
    }

    /// Check if any discount is applied.
    pub fn has_discounts(&self) -> bool {
        self.discounts > 0.0
    }
}
