//! Session lifecycle slice

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    domain::{SessionId, session::Sessions},
    infra::ClientError,
};

use super::SessionError;

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
}

pub async fn create_session_endpoint(
    State(sessions): State<Sessions>,
) -> Result<(StatusCode, Json<SessionCreated>), ClientError> {
    let session_id = sessions.create().await;
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

pub async fn end_session_endpoint(
    State(sessions): State<Sessions>,
    Path(session_uuid): Path<Uuid>,
) -> Result<StatusCode, ClientError> {
    let session_id = SessionId::from(session_uuid);
    if sessions.end(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(SessionError::DoesNotExist(session_id).into())
    }
}
