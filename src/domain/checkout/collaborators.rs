//! Contracts for the external payment and order-placement services.
//!
//! Both calls resolve to a plain `Result`. Declines and transport failures are both
//! `CollaboratorError`s and the checkout flow treats them the same way.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{CheckoutId, cart::CartLineItem};

use super::ShippingDetails;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
pub enum CollaboratorError {
    #[error("{0}")]
    Declined(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Card details as typed by the customer. They only live for the duration of an authorize call.
#[derive(Clone, serde::Deserialize)]
pub struct PaymentDetails {
    pub method: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub cardholder_name: String,
}

impl std::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("method", &self.method)
            .field("card_number", &"<redacted>")
            .field("cardholder_name", &self.cardholder_name)
            .finish_non_exhaustive()
    }
}

/// What the checkout keeps after a successful authorization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct PaymentSummary {
    pub token: String,
    pub method: String,
    pub card_last4: String,
    pub cardholder_name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OrderRequest {
    pub checkout_id: CheckoutId,
    pub shipping: ShippingDetails,
    pub payment_token: String,
    pub items: Vec<CartLineItem>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub transaction_id: String,
    pub total: Decimal,
    pub placed_at: jiff::Timestamp,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, details: PaymentDetails) -> Result<PaymentSummary, CollaboratorError>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, request: OrderRequest)
    -> Result<OrderConfirmation, CollaboratorError>;
}

pub type SharedPaymentGateway = Arc<dyn PaymentGateway>;
pub type SharedOrderService = Arc<dyn OrderService>;
