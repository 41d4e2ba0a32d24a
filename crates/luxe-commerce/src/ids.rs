//! Newtype IDs for type-safe identifiers.
//!
//! Catalog and profile identifiers come from the mock sources as plain
//! strings; wrapping them keeps a `ProductId` from being passed where a
//! `UserId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);
define_id!(AddressId);
define_id!(PaymentMethodId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("ring-123");
        assert_eq!(id.as_str(), "ring-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "necklace-456".into();
        assert_eq!(id.as_str(), "necklace-456");
    }

    #[test]
    fn test_id_display() {
        let id = UserId::new("user-1");
        assert_eq!(format!("{}", id), "user-1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("earring-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""earring-7""#);

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
