//! Cart Items slice

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    domain::{SessionId, session::Sessions},
    infra::ClientError,
};

use super::CartSnapshot;

//------------------------- Web API ----------------------------

pub async fn cart_items_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<Json<CartSnapshot>, ClientError> {
    let cart = sessions
        .with_session(SessionId::from(session_uuid), |session| session.cart.snapshot())
        .await?;
    Ok(Json(cart))
}
