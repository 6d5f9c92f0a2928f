//! Checkout session state machine.
//!
//! ```text
//!   Shipping ──submit_shipping──► Payment ──payment approved──► Confirmation ──order placed──► Complete
//!       ▲                            │
//!       └────go_back_to_shipping─────┘
//! ```
//!
//! Transitions that wait on a collaborator are split into `begin_*`, which issues a
//! `RequestTicket`, and `finish_*`, which only applies a response whose ticket is still current.

use rust_decimal::Decimal;
use strum_macros::Display;

use crate::domain::{CheckoutId, pricing::ShippingPolicy};

use super::{CheckoutError, PaymentSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckoutStage {
    Shipping,
    Payment,
    Confirmation,
    Complete,
}

/// Validated at the form boundary before it reaches the checkout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Totals fixed when shipping is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FrozenTotals {
    pub items_total: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}

/// Identifies one outstanding collaborator request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub checkout_id: CheckoutId,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CheckoutSession {
    pub(super) id: CheckoutId,
    pub(super) stage: CheckoutStage,
    pub(super) shipping: Option<ShippingDetails>,
    pub(super) payment: Option<PaymentSummary>,
    pub(super) totals: Option<FrozenTotals>,
    pub(super) last_error: Option<String>,
    pub(super) started_at: jiff::Timestamp,
    #[serde(rename = "request_in_flight", serialize_with = "serialize_in_flight")]
    pub(super) in_flight: Option<u64>,
    #[serde(skip)]
    pub(super) next_sequence: u64,
    #[serde(skip)]
    pub(super) shipping_policy: ShippingPolicy,
}

fn serialize_in_flight<S: serde::Serializer>(
    in_flight: &Option<u64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(in_flight.is_some())
}

impl CheckoutSession {
    pub fn new(shipping_policy: ShippingPolicy) -> Self {
        Self {
            id: CheckoutId::new(),
            stage: CheckoutStage::Shipping,
            shipping: None,
            payment: None,
            totals: None,
            last_error: None,
            started_at: jiff::Timestamp::now(),
            in_flight: None,
            next_sequence: 0,
            shipping_policy,
        }
    }

    pub fn id(&self) -> CheckoutId {
        self.id
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn shipping(&self) -> Option<&ShippingDetails> {
        self.shipping.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentSummary> {
        self.payment.as_ref()
    }

    pub fn totals(&self) -> Option<FrozenTotals> {
        self.totals
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(super) fn require_stage(
        &self,
        expected: CheckoutStage,
        action: &'static str,
    ) -> Result<(), CheckoutError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CheckoutError::InvalidTransition {
                from: self.stage,
                action,
            })
        }
    }

    pub(super) fn issue_ticket(&mut self) -> Result<RequestTicket, CheckoutError> {
        if self.in_flight.is_some() {
            return Err(CheckoutError::RequestInFlight);
        }
        self.next_sequence += 1;
        self.in_flight = Some(self.next_sequence);
        Ok(RequestTicket {
            checkout_id: self.id,
            sequence: self.next_sequence,
        })
    }

    /// Consumes the outstanding request if `ticket` is the one this checkout is waiting on.
    pub(super) fn redeem_ticket(&mut self, ticket: RequestTicket) -> Result<(), CheckoutError> {
        if ticket.checkout_id != self.id || self.in_flight != Some(ticket.sequence) {
            return Err(CheckoutError::StaleResponse);
        }
        self.in_flight = None;
        Ok(())
    }

    /// Drops any outstanding request so its response is discarded when it arrives.
    pub(super) fn cancel_in_flight(&mut self) {
        self.in_flight = None;
    }
}

//-------------------------- Tests -------------------------------
