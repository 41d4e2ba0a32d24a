//! Coupon types and the coupon lookup table.

use crate::error::CommerceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A percentage-off coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Coupon code (e.g., "LUXE15").
    pub code: String,
    /// Description for display.
    pub description: String,
    /// Percentage taken off the subtotal (0.0 - 100.0).
    pub discount_percentage: f64,
    /// Expiry timestamp (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl Coupon {
    /// Create a coupon with no expiry.
    pub fn new(code: impl Into<String>, description: impl Into<String>, percentage: f64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            discount_percentage: percentage,
            expires_at: None,
        }
    }

    /// Set expiration date.
    pub fn expires_at(mut self, timestamp: impl Into<String>) -> Self {
        self.expires_at = Some(timestamp.into());
        self
    }

    /// Check if the coupon has expired at `now`.
    ///
    /// An unparseable expiry is treated as never expiring.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ends| now > ends)
            .unwrap_or(false)
    }
}

/// Fixed table of redeemable coupons.
#[derive(Debug, Clone)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    /// Create a book from explicit coupons.
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// Look up a code, case-insensitively.
    pub fn lookup(&self, code: &str) -> Result<Coupon, CommerceError> {
        self.lookup_at(code, Utc::now())
    }

    /// Look up a code as of `now`.
    pub fn lookup_at(&self, code: &str, now: DateTime<Utc>) -> Result<Coupon, CommerceError> {
        let normalized = code.trim().to_uppercase();
        let coupon = self
            .coupons
            .iter()
            .find(|c| c.code.to_uppercase() == normalized)
            .ok_or_else(|| CommerceError::InvalidCouponCode(code.trim().to_string()))?;

        if coupon.is_expired_at(now) {
            return Err(CommerceError::CouponExpired(coupon.code.clone()));
        }
        Ok(coupon.clone())
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::new(vec![Coupon::new("LUXE15", "15% off your order", 15.0)])
    }
}
