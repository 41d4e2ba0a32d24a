//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No account matches the email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token unknown or no longer valid.
    #[error("User session expired")]
    SessionExpired,
}
