use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::{cart::CartError, checkout::CheckoutError, session::SessionError};

#[derive(Debug)]
pub enum ClientError {
    Cart(CartError),
    Checkout(CheckoutError),
    Session(SessionError),
    Internal(anyhow::Error),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ClientError::Cart(cart_error) => match cart_error {
                CartError::ProductDoesNotExist(_) => (StatusCode::NOT_FOUND, cart_error.to_string()),
            },
            ClientError::Checkout(checkout_error) => match checkout_error {
                CheckoutError::Session(session_error) => {
                    (StatusCode::NOT_FOUND, session_error.to_string())
                }
                CheckoutError::NoActiveCheckout => {
                    (StatusCode::NOT_FOUND, checkout_error.to_string())
                }
                CheckoutError::RequestInFlight | CheckoutError::StaleResponse => {
                    (StatusCode::CONFLICT, checkout_error.to_string())
                }
                CheckoutError::PaymentFailed(_) | CheckoutError::OrderFailed(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, checkout_error.to_string())
                }
                _ => (StatusCode::BAD_REQUEST, checkout_error.to_string()),
            },
            ClientError::Session(session_error) => {
                (StatusCode::NOT_FOUND, session_error.to_string())
            }
            ClientError::Internal(e) => {
                error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Please ask your system administrator to check the logs.".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<CartError> for ClientError {
    fn from(cart_error: CartError) -> Self {
        ClientError::Cart(cart_error)
    }
}

impl From<CheckoutError> for ClientError {
    fn from(checkout_error: CheckoutError) -> Self {
        ClientError::Checkout(checkout_error)
    }
}

impl From<SessionError> for ClientError {
    fn from(session_error: SessionError) -> Self {
        ClientError::Session(session_error)
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(value: anyhow::Error) -> Self {
        ClientError::Internal(value)
    }
}
