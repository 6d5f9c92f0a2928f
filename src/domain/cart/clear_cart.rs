//! Clear Cart slice

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{SessionId, pricing::line_total, session::Sessions},
    infra::ClientError,
};

use super::{CartLineItem, CartSnapshot, CartStore};

//------------------------- Web API ----------------------------

pub async fn clear_cart_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<CartSnapshot>, ClientError> {
    let cart = sessions
        .with_session(SessionId::from(session_uuid), |session| {
            session.cart.clear_cart();
            session.cart.snapshot()
        })
        .await?;

    Ok(Json(cart))
}

//------------------------- Command ----------------------------

impl CartStore {
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.total_quantity = 0;
        self.total_amount = Decimal::ZERO;
        info!("Cart cleared");
    }

    /// Takes the ordered quantities out of the cart. Units added after the order was packaged
    /// stay behind.
    pub fn clear_ordered(&mut self, ordered: &[CartLineItem]) {
        for ordered_line in ordered {
            let Some(line) = self.line_mut(&ordered_line.id) else {
                continue;
            };
            let taken = ordered_line.quantity.min(line.quantity);
            let price = line.price;
            line.quantity -= taken;
            line.total_price = line_total(price, line.quantity);
            self.total_quantity -= taken;
            self.total_amount -= line_total(price, taken);
        }
        self.items.retain(|line| line.quantity > 0);
        info!("Ordered items cleared, {} units left in cart", self.total_quantity);
    }
}

//-------------------------- Tests -------------------------------
