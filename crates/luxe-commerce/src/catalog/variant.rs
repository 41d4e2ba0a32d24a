//! Variant selection and variant keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token used for an unselected size or color.
pub const DEFAULT_VARIANT_TOKEN: &str = "default";

/// The options a customer picked for a cart line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl VariantSelection {
    /// Create a selection; `None` means the option was not picked.
    pub fn new(size: Option<&str>, color: Option<&str>) -> Self {
        Self {
            size: size.map(str::to_string),
            color: color.map(str::to_string),
        }
    }

    /// Derive the line identity key, `"{color}-{size}"`.
    pub fn key(&self) -> VariantKey {
        VariantKey(format!(
            "{}-{}",
            self.color.as_deref().unwrap_or(DEFAULT_VARIANT_TOKEN),
            self.size.as_deref().unwrap_or(DEFAULT_VARIANT_TOKEN),
        ))
    }
}

/// Deterministic identity string for a variant selection.
///
/// Together with the product id it identifies a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VariantKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&VariantSelection> for VariantKey {
    fn from(selection: &VariantSelection) -> Self {
        selection.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_with_both_options() {
        let v = VariantSelection::new(Some("7"), Some("Rose Gold"));
        assert_eq!(v.key().as_str(), "Rose Gold-7");
    }

    #[test]
    fn test_key_defaults() {
        assert_eq!(VariantSelection::default().key().as_str(), "default-default");
        assert_eq!(
            VariantSelection::new(Some("M"), None).key().as_str(),
            "default-M"
        );
        assert_eq!(
            VariantSelection::new(None, Some("Silver")).key().as_str(),
            "Silver-default"
        );
    }

    #[test]
    fn test_key_is_deterministic() {
        let a = VariantSelection::new(Some("6"), Some("Gold"));
        let b = a.clone();
        assert_eq!(a.key(), b.key());
        assert_eq!(VariantKey::from(&a), VariantKey::from("Gold-6"));
    }
}
