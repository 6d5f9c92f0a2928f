//! Submit Shipping slice, plus the one backward edge from Payment.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{
        SessionId,
        session::{Sessions, StorefrontSession},
    },
    infra::ClientError,
};

use super::{CheckoutError, CheckoutSession, CheckoutStage, FrozenTotals, ShippingDetails};

//------------------------- Web API ----------------------------

pub async fn submit_shipping_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
    Json(payload): Json<ShippingDetails>,
) -> Result<Json<CheckoutSession>, ClientError> {
    let checkout = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            session.submit_shipping(payload)
        })
        .await??;
    Ok(Json(checkout))
}

pub async fn go_back_to_shipping_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<CheckoutSession>, ClientError> {
    let checkout = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            let checkout = session.checkout_mut()?;
            checkout.go_back_to_shipping()?;
            Ok::<_, CheckoutError>(checkout.clone())
        })
        .await??;
    Ok(Json(checkout))
}

//------------------------- Command ----------------------------

impl StorefrontSession {
    /// Submits shipping for the live checkout, pricing it against the current cart.
    pub fn submit_shipping(
        &mut self,
        details: ShippingDetails,
    ) -> Result<CheckoutSession, CheckoutError> {
        let items_total = self.cart.total_amount();
        let cart_is_empty = self.cart.is_empty();
        let checkout = self.checkout_mut()?;
        checkout.require_stage(CheckoutStage::Shipping, "submit shipping")?;
        if cart_is_empty {
            return Err(CheckoutError::EmptyCart);
        }
        checkout.submit_shipping(details, items_total)?;
        Ok(checkout.clone())
    }
}

impl CheckoutSession {
    /// Stores the shipping details and freezes shipping cost and total from `items_total`.
    /// Resubmitting after going back recomputes both.
    pub fn submit_shipping(
        &mut self,
        details: ShippingDetails,
        items_total: Decimal,
    ) -> Result<(), CheckoutError> {
        self.require_stage(CheckoutStage::Shipping, "submit shipping")?;

        let shipping_cost = self.shipping_policy.cost_for(items_total);
        let totals = FrozenTotals {
            items_total,
            shipping_cost,
            total: items_total + shipping_cost,
        };
        self.shipping = Some(details);
        self.totals = Some(totals);
        self.last_error = None;
        self.stage = CheckoutStage::Payment;

        info!(
            "Checkout {} priced at {} (shipping {shipping_cost}), moving to payment",
            self.id, totals.total
        );
        Ok(())
    }

    /// Returns to the shipping form with the submitted details still filled in.
    pub fn go_back_to_shipping(&mut self) -> Result<(), CheckoutError> {
        self.require_stage(CheckoutStage::Payment, "go back to shipping")?;
        self.cancel_in_flight();
        self.last_error = None;
        self.stage = CheckoutStage::Shipping;
        info!("Checkout {} went back to shipping", self.id);
        Ok(())
    }
}

//-------------------------- Tests -------------------------------
