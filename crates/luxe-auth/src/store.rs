//! Persisted auth state container.

use std::sync::Arc;

use luxe_cache::{Cache, Persisted};
use tracing::{info, warn};

use crate::service::AuthService;
use crate::state::AuthState;
use crate::user::UserProfile;
use crate::AuthError;

/// Storage key for the auth state.
pub const AUTH_STORAGE_KEY: &str = "jewellery-auth";

/// Auth state container.
///
/// Restores the last session from the cache on construction and writes
/// every change back.
pub struct AuthStore {
    state: Persisted<AuthState>,
    service: Arc<dyn AuthService>,
}

impl AuthStore {
    /// Restore the last session from the cache.
    pub fn new(cache: Cache, service: Arc<dyn AuthService>) -> Self {
        Self {
            state: Persisted::load(cache, AUTH_STORAGE_KEY, AuthState::signed_out()),
            service,
        }
    }

    /// Current auth state.
    pub fn state(&self) -> &AuthState {
        self.state.get()
    }

    /// Check if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }

    /// Check if a login or profile refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading
    }

    /// Session token, when signed in.
    pub fn token(&self) -> Option<&str> {
        self.state.get().token.as_deref()
    }

    /// Signed-in profile.
    pub fn user(&self) -> Option<&UserProfile> {
        self.state.get().user.as_ref()
    }

    /// Sign in.
    ///
    /// On failure the state is reset to signed out and the error returned.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.state.update(|s| s.is_loading = true);

        match self.service.login(email, password).await {
            Ok(response) => {
                info!(user_id = %response.user.id, "signed in");
                self.state
                    .set(AuthState::authenticated(response.token, response.user));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "sign in failed");
                self.state.set(AuthState::signed_out());
                Err(e)
            }
        }
    }

    /// Sign out and forget the persisted session.
    pub fn logout(&mut self) {
        self.state.remove();
        info!("signed out");
    }

    /// Reload the profile for the current token.
    ///
    /// Does nothing when signed out. If the token is rejected the session is
    /// logged out and the error returned.
    pub async fn refresh_profile(&mut self) -> Result<(), AuthError> {
        let Some(token) = self.state.get().token.clone() else {
            return Ok(());
        };

        self.state.update(|s| s.is_loading = true);
        match self.service.me(&token).await {
            Ok(profile) => {
                self.state.update(|s| {
                    s.user = Some(profile);
                    s.is_loading = false;
                });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "profile refresh rejected, signing out");
                self.logout();
                Err(e)
            }
        }
    }
}
