//! Stand-in payment and order services for development and tests.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::{
    CollaboratorError, OrderConfirmation, OrderRequest, OrderService, PaymentDetails,
    PaymentGateway, PaymentSummary,
};

/// Card numbers ending in this suffix are always declined.
pub const DECLINED_CARD_SUFFIX: &str = "0002";

#[derive(Debug, Clone, Default)]
pub struct SandboxPaymentGateway {
    latency: Duration,
}

impl SandboxPaymentGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl PaymentGateway for SandboxPaymentGateway {
    async fn authorize(&self, details: PaymentDetails) -> Result<PaymentSummary, CollaboratorError> {
        tokio::time::sleep(self.latency).await;

        let digits: String = details
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CollaboratorError::Declined("card number is invalid".to_owned()));
        }
        if digits.ends_with(DECLINED_CARD_SUFFIX) {
            return Err(CollaboratorError::Declined("card declined".to_owned()));
        }

        let card_last4 = digits
            .get(digits.len() - 4..)
            .unwrap_or_default()
            .to_owned();
        debug!("Sandbox authorized card ending {card_last4}");
        Ok(PaymentSummary {
            token: format!("tok_{}", Uuid::new_v4().simple()),
            method: details.method,
            card_last4,
            cardholder_name: details.cardholder_name,
        })
    }
}

#[derive(Debug)]
pub struct SandboxOrderService {
    latency: Duration,
    next_order: AtomicU64,
}

impl SandboxOrderService {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_order: AtomicU64::new(100_001),
        }
    }
}

#[async_trait]
impl OrderService for SandboxOrderService {
    async fn place_order(
        &self,
        request: OrderRequest,
    ) -> Result<OrderConfirmation, CollaboratorError> {
        tokio::time::sleep(self.latency).await;

        if request.items.is_empty() {
            return Err(CollaboratorError::Declined("order has no items".to_owned()));
        }

        let order_number = format!("ORD-{}", self.next_order.fetch_add(1, Ordering::Relaxed));
        debug!("Sandbox placed {order_number} for checkout {}", request.checkout_id);
        Ok(OrderConfirmation {
            order_number,
            transaction_id: Uuid::new_v4().to_string(),
            total: request.total,
            placed_at: jiff::Timestamp::now(),
        })
    }
}

//-------------------------- Tests -------------------------------
