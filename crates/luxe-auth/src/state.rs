//! Auth state.

use crate::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Authentication state of the current session.
///
/// `is_loading` is transient and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    #[serde(skip)]
    pub is_loading: bool,
}

impl AuthState {
    /// Signed-in state.
    pub fn authenticated(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token.into()),
            user: Some(user),
            is_loading: false,
        }
    }

    /// Signed-out state.
    pub fn signed_out() -> Self {
        Self::default()
    }
}
