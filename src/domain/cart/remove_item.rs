use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{ProductId, SessionId, session::Sessions},
    infra::ClientError,
};

use super::{CartSnapshot, CartStore};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RemoveItemPayload {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RemoveItemResponse {
    pub outcome: RemoveOutcome,
    pub cart: CartSnapshot,
}

pub async fn remove_item_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
    Json(payload): Json<RemoveItemPayload>,
) -> Result<Json<RemoveItemResponse>, ClientError> {
    let product_id = ProductId::from(payload.product_id);
    let response = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            let outcome = session.cart.remove_item(&product_id);
            RemoveItemResponse {
                outcome,
                cart: session.cart.snapshot(),
            }
        })
        .await?;

    Ok(Json(response))
}

//------------------------- Command ----------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemoveOutcome {
    Decremented { quantity: u32 },
    /// The last unit went, so the line went with it.
    Removed,
    NotInCart,
}

impl CartStore {
    /// Takes one unit of a product out of the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> RemoveOutcome {
        let Some(index) = self.items.iter().position(|item| item.id == *product_id) else {
            return RemoveOutcome::NotInCart;
        };

        let (price, outcome) = match self.items.get_mut(index) {
            Some(line) if line.quantity > 1 => {
                line.quantity -= 1;
                line.total_price -= line.price;
                (line.price, RemoveOutcome::Decremented { quantity: line.quantity })
            }
            _ => {
                let line = self.items.remove(index);
                (line.price, RemoveOutcome::Removed)
            }
        };

        self.total_quantity -= 1;
        self.total_amount -= price;

        info!("Removed one unit of product {product_id} from cart: {outcome:?}");
        outcome
    }
}

//-------------------------- Tests -------------------------------
