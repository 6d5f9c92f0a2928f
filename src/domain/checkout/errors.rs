use rust_decimal::Decimal;

use crate::domain::session::SessionError;

use super::{CheckoutStage, CollaboratorError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cannot start checkout with an empty cart.")]
    EmptyCart,
    #[error("No checkout is in progress.")]
    NoActiveCheckout,
    #[error("Cannot {action} while checkout is at the {from} stage.")]
    InvalidTransition {
        from: CheckoutStage,
        action: &'static str,
    },
    #[error("A request for this checkout stage is already in flight.")]
    RequestInFlight,
    #[error("Response arrived for a checkout request that is no longer current.")]
    StaleResponse,
    #[error("Cart changed after shipping was submitted (expected {expected}, found {actual}).")]
    CartChanged { expected: Decimal, actual: Decimal },
    #[error("Payment failed: {0}")]
    PaymentFailed(CollaboratorError),
    #[error("Order placement failed: {0}")]
    OrderFailed(CollaboratorError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
