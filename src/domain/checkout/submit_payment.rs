//! Submit Payment slice

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    domain::{SessionId, session::Sessions},
    infra::ClientError,
};

use super::{
    CheckoutError, CheckoutSession, CheckoutStage, CollaboratorError, PaymentDetails,
    PaymentGateway, PaymentSummary, RequestTicket, SharedPaymentGateway,
};

//------------------------- Web API ----------------------------

pub async fn submit_payment_endpoint(
    State(sessions): State<Sessions>,
    State(gateway): State<SharedPaymentGateway>,
    Path(session_uuid): Path<Uuid>,
    Json(payload): Json<PaymentDetails>,
) -> Result<Json<CheckoutSession>, ClientError> {
    let checkout = submit_payment(&sessions, gateway.as_ref(), session_uuid.into(), payload).await?;
    Ok(Json(checkout))
}

//----------------------- Implementation --------------------------

/// Authorizes payment for the session's live checkout.
///
/// The session lock is released while the gateway is working, so the customer may navigate
/// meanwhile. A response for a checkout that has since moved on is discarded with
/// `StaleResponse`.
pub async fn submit_payment(
    sessions: &Sessions,
    gateway: &dyn PaymentGateway,
    session_id: SessionId,
    details: PaymentDetails,
) -> Result<CheckoutSession, CheckoutError> {
    let ticket = sessions
        .with_session(session_id, |session| session.checkout_mut()?.begin_payment())
        .await??;

    let outcome = gateway.authorize(details).await;

    sessions
        .with_session(session_id, |session| {
            let checkout = session
                .checkout
                .as_mut()
                .ok_or(CheckoutError::StaleResponse)?;
            checkout.finish_payment(ticket, outcome)?;
            Ok::<_, CheckoutError>(checkout.clone())
        })
        .await?
        .inspect_err(|e| {
            if *e == CheckoutError::StaleResponse {
                warn!("Discarded payment response for checkout {}", ticket.checkout_id);
            }
        })
}

impl CheckoutSession {
    pub fn begin_payment(&mut self) -> Result<RequestTicket, CheckoutError> {
        self.require_stage(CheckoutStage::Payment, "submit payment")?;
        let ticket = self.issue_ticket()?;
        self.last_error = None;
        Ok(ticket)
    }

    /// Applies the gateway's answer. A decline keeps the checkout at Payment for a retry.
    pub fn finish_payment(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PaymentSummary, CollaboratorError>,
    ) -> Result<(), CheckoutError> {
        self.redeem_ticket(ticket)?;
        match outcome {
            Ok(summary) => {
                info!(
                    "Checkout {} payment authorized with card ending {}",
                    self.id, summary.card_last4
                );
                self.payment = Some(summary);
                self.stage = CheckoutStage::Confirmation;
                Ok(())
            }
            Err(e) => {
                warn!("Checkout {} payment failed: {e}", self.id);
                self.last_error = Some(e.to_string());
                Err(CheckoutError::PaymentFailed(e))
            }
        }
    }
}

//-------------------------- Tests -------------------------------
