//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
///
/// The cart reducer itself never fails; these errors come from the layers
/// around it (coupon lookup, checkout, catalog loading).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product catalog could not be loaded.
    #[error("Unable to load products: {0}")]
    ProductLoad(String),

    /// Invalid coupon code.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Coupon expired.
    #[error("Coupon expired: {0}")]
    CouponExpired(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
