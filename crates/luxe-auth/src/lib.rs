//! Authentication for the Luxe storefront.
//!
//! Provides the user profile model, a mock credential source and the
//! persisted auth state container.

mod error;
mod service;
mod state;
mod store;
mod user;

pub use error::AuthError;
pub use service::{AuthService, LoginResponse, MockAccount, MockAuthService};
pub use state::AuthState;
pub use store::{AuthStore, AUTH_STORAGE_KEY};
pub use user::{Address, PaymentMethod, UserProfile};
