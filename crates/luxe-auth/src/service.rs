//! Credential sources.

use async_trait::async_trait;
use luxe_commerce::ids::{AddressId, PaymentMethodId, UserId};
use luxe_data::SimulatedLatency;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::user::{Address, PaymentMethod, UserProfile};
use crate::AuthError;

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Asynchronous credential source.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a token and profile.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;

    /// Resolve a token to its profile.
    async fn me(&self, token: &str) -> Result<UserProfile, AuthError>;
}

/// A mock account: profile plus the credentials that unlock it.
#[derive(Debug, Clone)]
pub struct MockAccount {
    pub profile: UserProfile,
    pub password: String,
    pub token: String,
}

/// Fixed list of accounts behind a simulated delay.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    accounts: Vec<MockAccount>,
    latency: SimulatedLatency,
}

impl MockAuthService {
    pub fn with_accounts(accounts: Vec<MockAccount>) -> Self {
        Self {
            accounts,
            latency: SimulatedLatency::default(),
        }
    }

    /// The demo account shipped with the storefront.
    pub fn builtin() -> Self {
        Self::with_accounts(vec![demo_account()])
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        self.latency.wait().await;
        let account = self
            .accounts
            .iter()
            .find(|a| a.profile.email == email && a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(user_id = %account.profile.id, "mock login accepted");
        Ok(LoginResponse {
            token: account.token.clone(),
            user: account.profile.clone(),
        })
    }

    async fn me(&self, token: &str) -> Result<UserProfile, AuthError> {
        self.latency.wait().await;
        self.accounts
            .iter()
            .find(|a| a.token == token)
            .map(|a| a.profile.clone())
            .ok_or(AuthError::SessionExpired)
    }
}

fn demo_account() -> MockAccount {
    let address = |id: &str, label: &str, line1: &str, is_default: bool| Address {
        id: AddressId::new(id),
        label: label.to_string(),
        line1: line1.to_string(),
        line2: None,
        city: "New York".to_string(),
        state: "NY".to_string(),
        postal_code: "10001".to_string(),
        country: "USA".to_string(),
        is_default,
    };

    MockAccount {
        profile: UserProfile {
            id: UserId::new("user-1"),
            email: "amelia@luxegems.com".to_string(),
            first_name: "Amelia".to_string(),
            last_name: "Stone".to_string(),
            phone: Some("+1 555 0199".to_string()),
            addresses: vec![
                address("addr-1", "Home", "123 Radiant Street", true),
                address("addr-2", "Work", "7 High Street", false),
            ],
            payment_methods: vec![PaymentMethod {
                id: PaymentMethodId::new("card-1"),
                brand: "Visa".to_string(),
                last4: "4242".to_string(),
                expiry_month: 9,
                expiry_year: 2027,
                is_default: true,
            }],
            wishlist: Vec::new(),
        },
        password: "password123".to_string(),
        token: "token-user-1".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service() -> MockAuthService {
        MockAuthService::builtin().with_latency(SimulatedLatency::none())
    }

    #[tokio::test]
    async fn test_login_success() {
        let response = service()
            .login("amelia@luxegems.com", "password123")
            .await
            .unwrap();
        assert_eq!(response.token, "token-user-1");
        assert_eq!(response.user.display_name(), "Amelia Stone");
        assert_eq!(
            response.user.default_address().map(|a| a.label.as_str()),
            Some("Home")
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let err = service()
            .login("amelia@luxegems.com", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_me() {
        let profile = service().me("token-user-1").await.unwrap();
        assert_eq!(profile.id.as_str(), "user-1");
        assert_eq!(
            profile.default_payment_method().map(|p| p.last4.as_str()),
            Some("4242")
        );

        assert_eq!(service().me("stale").await.unwrap_err(), AuthError::SessionExpired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_wait_for_latency() {
        let service = MockAuthService::builtin();
        let start = tokio::time::Instant::now();
        let _ = service.me("token-user-1").await;
        assert!(start.elapsed() >= Duration::from_millis(400));
    }
}
