//! Cart state and the cart reducer.

use crate::cart::item::clamp_quantity;
use crate::cart::{CartItem, CartSummary, Coupon};
use crate::catalog::VariantKey;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart: ordered lines plus at most one coupon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    /// Lines in insertion order.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Applied coupon.
    #[serde(default)]
    pub coupon: Option<Coupon>,
}

impl CartState {
    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by identity.
    pub fn get_item(&self, product_id: &ProductId, key: &VariantKey) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, key))
    }

    /// Calculate the cart summary.
    pub fn summary(&self) -> CartSummary {
        CartSummary::calculate(&self.items, self.coupon.as_ref())
    }
}

/// Cart state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a line, merging into an existing line with the same identity.
    AddItem(CartItem),
    /// Remove the line with this identity.
    RemoveItem {
        product_id: ProductId,
        variant_key: VariantKey,
    },
    /// Set the quantity of the line with this identity.
    UpdateQuantity {
        product_id: ProductId,
        variant_key: VariantKey,
        quantity: i64,
    },
    /// Drop all lines and the coupon.
    Clear,
    /// Replace the coupon (`None` clears it).
    ApplyCoupon(Option<Coupon>),
}

/// Compute the next cart state.
///
/// Never fails: out-of-range quantities are clamped and actions on missing
/// lines leave the state unchanged.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(mut incoming) => {
            let key = incoming.variant_key();
            if let Some(existing) = state
                .items
                .iter_mut()
                .find(|i| i.matches(&incoming.product_id, &key))
            {
                let merged = i64::from(existing.quantity) + i64::from(incoming.quantity);
                existing.quantity = clamp_quantity(merged, existing.max_quantity);
            } else {
                incoming.quantity = clamp_quantity(i64::from(incoming.quantity), incoming.max_quantity);
                state.items.push(incoming);
            }
        }
        CartAction::RemoveItem {
            product_id,
            variant_key,
        } => {
            state.items.retain(|i| !i.matches(&product_id, &variant_key));
        }
        CartAction::UpdateQuantity {
            product_id,
            variant_key,
            quantity,
        } => {
            if let Some(item) = state
                .items
                .iter_mut()
                .find(|i| i.matches(&product_id, &variant_key))
            {
                item.quantity = clamp_quantity(quantity, item.max_quantity);
            }
        }
        CartAction::Clear => {
            state = CartState::default();
        }
        CartAction::ApplyCoupon(coupon) => {
            state.coupon = coupon;
        }
    }
    state
}
