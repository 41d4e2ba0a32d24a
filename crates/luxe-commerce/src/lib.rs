//! Catalog, cart and search domain logic for the Luxe jewellery storefront.
//!
//! Everything in this crate is pure and synchronous:
//!
//! - **Catalog**: Products, variant selections and variant keys
//! - **Cart**: Cart lines, the cart reducer, coupons and the summary calculator
//! - **Search**: Product filters and sort modes
//!
//! # Example
//!
//! ```rust
//! use luxe_commerce::prelude::*;
//!
//! let item = CartItem {
//!     product_id: ProductId::new("ring-1"),
//!     name: "Solitaire Ring".to_string(),
//!     price: 100.0,
//!     sale_price: Some(80.0),
//!     image: "ring-1.jpg".to_string(),
//!     quantity: 2,
//!     variant: VariantSelection::new(Some("6"), Some("Gold")),
//!     max_quantity: 10,
//! };
//!
//! let state = reduce(CartState::default(), CartAction::AddItem(item));
//! let summary = CartSummary::calculate(&state.items, state.coupon.as_ref());
//! assert_eq!(summary.subtotal, 160.0);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Product, ProductVariants, VariantKey, VariantSelection};

    // Cart
    pub use crate::cart::{
        reduce, CartAction, CartItem, CartState, CartSummary, Coupon, CouponBook, TAX_RATE,
    };

    // Search
    pub use crate::search::{filter_products, sort_products, PriceRange, ProductFilters, SortOption};
}
