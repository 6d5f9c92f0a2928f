//! In-memory registry of storefront sessions, one per browser tab.
//!
//! Every access goes through `with_session`, which runs a synchronous closure under the lock.
//! Nothing awaits while the lock is held, so collaborator calls happen between two separate
//! `with_session` calls.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use tracing::info;

use crate::domain::{
    SessionId,
    cart::CartStore,
    checkout::{CheckoutSession, OrderConfirmation},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} does not exist.")]
    DoesNotExist(SessionId),
}

/// State owned by a single storefront session.
#[derive(Debug, Default)]
pub struct StorefrontSession {
    pub cart: CartStore,
    pub checkout: Option<CheckoutSession>,
    pub last_order: Option<OrderConfirmation>,
}

#[derive(Debug, Clone, Default)]
pub struct Sessions {
    inner: Arc<Mutex<HashMap<SessionId, StorefrontSession>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionId {
        let session_id = SessionId::new();
        self.inner
            .lock()
            .await
            .insert(session_id, StorefrontSession::default());
        info!("Session {session_id} created");
        session_id
    }

    /// Returns false when the session was already gone.
    pub async fn end(&self, session_id: SessionId) -> bool {
        let removed = self.inner.lock().await.remove(&session_id).is_some();
        if removed {
            info!("Session {session_id} ended");
        }
        removed
    }

    pub async fn with_session<R>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut StorefrontSession) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.inner.lock().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(SessionError::DoesNotExist(session_id))?;
        Ok(f(session))
    }
}
