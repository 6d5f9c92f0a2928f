//! Begin / Abandon Checkout slice

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{
        SessionId,
        pricing::ShippingPolicy,
        session::{Sessions, StorefrontSession},
    },
    infra::{ClientError, Settings},
};

use super::{CheckoutError, CheckoutSession};

//------------------------- Web API ----------------------------

pub async fn begin_checkout_endpoint(
    State(sessions): State<Sessions>,
    State(settings): State<Settings>,
    Path(session_uuid): Path<Uuid>,
) -> Result<(StatusCode, Json<CheckoutSession>), ClientError> {
    let policy = settings.checkout.shipping_policy();
    let checkout = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            session.begin_checkout(policy).cloned()
        })
        .await??;
    Ok((StatusCode::CREATED, Json(checkout)))
}

pub async fn checkout_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<CheckoutSession>, ClientError> {
    let checkout = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            session.checkout().cloned()
        })
        .await??;
    Ok(Json(checkout))
}

pub async fn abandon_checkout_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<StatusCode, ClientError> {
    sessions
        .with_session(SessionId::from(session_uuid), |session| {
            session.abandon_checkout()
        })
        .await??;
    Ok(StatusCode::NO_CONTENT)
}

//------------------------- Command ----------------------------

impl StorefrontSession {
    /// Starts a fresh checkout, replacing any previous one. Responses still owed to the
    /// replaced checkout will no longer match and are discarded when they arrive.
    pub fn begin_checkout(
        &mut self,
        policy: ShippingPolicy,
    ) -> Result<&CheckoutSession, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let checkout = self.checkout.insert(CheckoutSession::new(policy));
        info!("Checkout {} started", checkout.id());
        Ok(checkout)
    }

    pub fn abandon_checkout(&mut self) -> Result<(), CheckoutError> {
        let checkout = self.checkout.take().ok_or(CheckoutError::NoActiveCheckout)?;
        info!("Checkout {} abandoned at the {} stage", checkout.id(), checkout.stage());
        Ok(())
    }

    pub fn checkout(&self) -> Result<&CheckoutSession, CheckoutError> {
        self.checkout.as_ref().ok_or(CheckoutError::NoActiveCheckout)
    }

    pub fn checkout_mut(&mut self) -> Result<&mut CheckoutSession, CheckoutError> {
        self.checkout.as_mut().ok_or(CheckoutError::NoActiveCheckout)
    }
}

//-------------------------- Tests -------------------------------
