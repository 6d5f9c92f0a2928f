//! Confirm Order slice

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    domain::{
        SessionId,
        cart::CartLineItem,
        session::{Sessions, StorefrontSession},
    },
    infra::ClientError,
};

use super::{
    CheckoutError, CheckoutSession, CheckoutStage, CollaboratorError, OrderConfirmation,
    OrderRequest, OrderService, RequestTicket, SharedOrderService,
};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OrderPlaced {
    pub confirmation: OrderConfirmation,
    pub checkout: CheckoutSession,
}

pub async fn confirm_order_endpoint(
    State(sessions): State<Sessions>,
    State(orders): State<SharedOrderService>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<OrderPlaced>, ClientError> {
    let placed = confirm_order(&sessions, orders.as_ref(), session_uuid.into()).await?;
    Ok(Json(placed))
}

//----------------------- Implementation --------------------------

/// Places the order for the session's live checkout. The ordered items leave the cart only once
/// the order service confirms; any failure leaves cart and checkout exactly as they were.
pub async fn confirm_order(
    sessions: &Sessions,
    orders: &dyn OrderService,
    session_id: SessionId,
) -> Result<OrderPlaced, CheckoutError> {
    let (ticket, request) = sessions
        .with_session(session_id, |session| session.begin_order())
        .await??;

    let ordered = request.items.clone();
    let outcome = orders.place_order(request).await;

    sessions
        .with_session(session_id, |session| {
            session.finish_order(ticket, &ordered, outcome)
        })
        .await?
        .inspect_err(|e| {
            if *e == CheckoutError::StaleResponse {
                warn!("Discarded order response for checkout {}", ticket.checkout_id);
            }
        })
}

impl StorefrontSession {
    /// Packages the order request. The live cart must still add up to the items total frozen
    /// at shipping, otherwise the customer would be charged for a different cart.
    pub fn begin_order(&mut self) -> Result<(RequestTicket, OrderRequest), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let actual = self.cart.total_amount();
        let items = self.cart.items().to_vec();
        let checkout = self.checkout_mut()?;
        checkout.require_stage(CheckoutStage::Confirmation, "confirm the order")?;

        let (Some(shipping), Some(payment), Some(totals)) = (
            checkout.shipping.clone(),
            checkout.payment.as_ref().map(|p| p.token.clone()),
            checkout.totals,
        ) else {
            return Err(CheckoutError::InvalidTransition {
                from: checkout.stage,
                action: "confirm the order",
            });
        };

        if totals.items_total != actual {
            warn!(
                "Checkout {} cart total moved from {} to {actual}",
                checkout.id, totals.items_total
            );
            return Err(CheckoutError::CartChanged {
                expected: totals.items_total,
                actual,
            });
        }

        let ticket = checkout.issue_ticket()?;
        checkout.last_error = None;
        Ok((
            ticket,
            OrderRequest {
                checkout_id: checkout.id,
                shipping,
                payment_token: payment,
                items,
                total: totals.total,
            },
        ))
    }

    /// Applies the order service's answer. On success only the `ordered` lines leave the cart, so
    /// anything added while the request was out survives.
    pub fn finish_order(
        &mut self,
        ticket: RequestTicket,
        ordered: &[CartLineItem],
        outcome: Result<OrderConfirmation, CollaboratorError>,
    ) -> Result<OrderPlaced, CheckoutError> {
        let checkout = self.checkout.as_mut().ok_or(CheckoutError::StaleResponse)?;
        checkout.redeem_ticket(ticket)?;

        match outcome {
            Ok(confirmation) => {
                checkout.stage = CheckoutStage::Complete;
                let checkout = checkout.clone();
                info!(
                    "Checkout {} placed order {}",
                    checkout.id, confirmation.order_number
                );
                self.cart.clear_ordered(ordered);
                self.last_order = Some(confirmation.clone());
                Ok(OrderPlaced {
                    confirmation,
                    checkout,
                })
            }
            Err(e) => {
                warn!("Checkout {} order placement failed: {e}", checkout.id);
                checkout.last_error = Some(e.to_string());
                Err(CheckoutError::OrderFailed(e))
            }
        }
    }
}

//-------------------------- Tests -------------------------------
