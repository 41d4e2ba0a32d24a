//! Simulated checkout.

use std::time::Duration;

use chrono::{DateTime, Utc};
use luxe_commerce::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::CartStore;

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentChoice {
    #[default]
    Card,
    PayPal,
}

/// Checkout form contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    /// Country code (e.g., "USA", "UK").
    pub country: String,
    pub postal_code: String,
    pub save_address: bool,
    pub payment_method: PaymentChoice,
    pub card_name: String,
    pub card_number: String,
    /// "MM/YY".
    pub expiry: String,
    pub cvc: String,
    pub same_billing: bool,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            address: String::new(),
            city: String::new(),
            country: "USA".to_string(),
            postal_code: String::new(),
            save_address: false,
            payment_method: PaymentChoice::Card,
            card_name: String::new(),
            card_number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            same_billing: true,
        }
    }
}

impl CheckoutForm {
    /// Labels of required fields left blank, in form order.
    ///
    /// Card fields are only required when paying by card.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut required = vec![
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("street address", &self.address),
            ("city", &self.city),
            ("country", &self.country),
            ("postal code", &self.postal_code),
        ];
        if self.payment_method == PaymentChoice::Card {
            required.extend([
                ("cardholder name", &self.card_name),
                ("card number", &self.card_number),
                ("expiry", &self.expiry),
                ("security code", &self.cvc),
            ]);
        }

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::CheckoutIncomplete(missing.join(", ")))
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub email: String,
    pub items: Vec<CartItem>,
    pub coupon: Option<Coupon>,
    pub summary: CartSummary,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Places orders after a simulated processing delay.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    processing_delay: Duration,
}

impl Checkout {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Place an order for the cart contents and empty the cart.
    ///
    /// Nothing changes if the cart is empty or the form is incomplete.
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;

        tokio::time::sleep(self.processing_delay).await;

        let placed_at = Utc::now();
        let confirmation = OrderConfirmation {
            order_number: format!("ORD-{}", placed_at.timestamp_millis()),
            email: form.email.trim().to_string(),
            items: cart.items().to_vec(),
            coupon: cart.coupon().cloned(),
            summary: *cart.summary(),
            placed_at,
        };
        cart.clear();

        info!(
            order_number = %confirmation.order_number,
            total = confirmation.summary.total,
            "order placed"
        );
        Ok(confirmation)
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}
