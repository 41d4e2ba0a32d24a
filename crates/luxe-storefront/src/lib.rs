//! Session state for the Luxe jewellery storefront.
//!
//! Wires the domain crates into the containers a shopper session works with:
//!
//! - **Cart**: Reducer-driven cart persisted under `jewellery-cart`
//! - **Auth**: Session restored from `jewellery-auth`
//! - **Wishlist**: Saved product ids under `jewellery-wishlist`
//! - **Products**: Catalog listing with filters, sort and debounced search
//! - **Checkout**: Form validation and simulated order placement
//!
//! # Example
//!
//! ```rust,no_run
//! use luxe_storefront::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = StorefrontConfig::load("storefront.toml")?;
//! telemetry::init(&config.logging);
//!
//! let mut storefront = Storefront::from_config(&config)?;
//! storefront.products.refresh().await;
//! storefront
//!     .add_to_cart(&ProductId::new("prod-1"), VariantSelection::new(Some("6"), Some("Yellow Gold")), 1)
//!     .await?;
//! println!("total: {:.2}", storefront.cart.summary().total);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod debounce;
pub mod products;
pub mod search;
pub mod telemetry;
pub mod wishlist;

pub use app::Storefront;
pub use config::StorefrontConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use luxe_commerce::prelude::*;

    pub use crate::app::Storefront;
    pub use crate::cart::{CartStore, CART_STORAGE_KEY};
    pub use crate::checkout::{Checkout, CheckoutForm, OrderConfirmation, PaymentChoice};
    pub use crate::config::{StorageConfig, StorefrontConfig, TimingConfig};
    pub use crate::debounce::Debouncer;
    pub use crate::products::ProductStore;
    pub use crate::search::SearchBox;
    pub use crate::telemetry::{self, LogFormat, LoggingConfig};
    pub use crate::wishlist::{WishlistStore, WISHLIST_STORAGE_KEY};
}
