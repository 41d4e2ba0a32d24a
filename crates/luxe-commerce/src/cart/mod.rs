//! Shopping cart module.
//!
//! Contains cart lines, the cart reducer, coupons and the summary calculator.

mod cart;
mod coupon;
mod item;
mod summary;

pub use cart::{reduce, CartAction, CartState};
pub use coupon::{Coupon, CouponBook};
pub use item::{clamp_quantity, CartItem};
pub use summary::{CartSummary, TAX_RATE};
