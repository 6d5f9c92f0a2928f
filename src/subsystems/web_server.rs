use std::net::SocketAddr;

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use futures::FutureExt;
use tokio::select;
use tokio_graceful_shutdown::{IntoSubsystem, SubsystemHandle};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    AppState,
    domain::{cart, checkout, session},
    infra::ClientError,
};

pub struct WebServer {
    state: AppState,
}

impl WebServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

pub fn router(state: AppState) -> Router {
    axum::Router::new()
        .route("/sessions", post(session::create_session_endpoint))
        .route(
            "/sessions/{session_id}",
            axum::routing::delete(session::end_session_endpoint),
        )
        .route("/sessions/{session_id}/products", get(cart::products_endpoint))
        .route(
            "/sessions/{session_id}/products/{product_id}",
            get(cart::product_endpoint),
        )
        .route("/sessions/{session_id}/cart", get(cart::cart_items_endpoint))
        .route("/sessions/{session_id}/cart/add", post(cart::add_item_endpoint))
        .route(
            "/sessions/{session_id}/cart/remove",
            post(cart::remove_item_endpoint),
        )
        .route(
            "/sessions/{session_id}/cart/clear",
            post(cart::clear_cart_endpoint),
        )
        .route(
            "/sessions/{session_id}/checkout",
            get(checkout::checkout_endpoint)
                .post(checkout::begin_checkout_endpoint)
                .delete(checkout::abandon_checkout_endpoint),
        )
        .route(
            "/sessions/{session_id}/checkout/shipping",
            post(checkout::submit_shipping_endpoint),
        )
        .route(
            "/sessions/{session_id}/checkout/back",
            post(checkout::go_back_to_shipping_endpoint),
        )
        .route(
            "/sessions/{session_id}/checkout/payment",
            post(checkout::submit_payment_endpoint),
        )
        .route(
            "/sessions/{session_id}/checkout/confirm",
            post(checkout::confirm_order_endpoint),
        )
        .route("/healthcheck", get(health_check_endpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[async_trait]
impl IntoSubsystem<anyhow::Error> for WebServer {
    async fn run(self, subsys: SubsystemHandle) -> Result<(), anyhow::Error> {
        let address = self.state.settings.application.address();
        let socket_addr: SocketAddr = address.parse()
            .inspect_err(|e| error!("Could not parse server address {address}.\nCheck application host and port in configuration settings.\nFailed with {e}"))?;

        let router = router(self.state);

        let listener = tokio::net::TcpListener::bind(socket_addr)
            .await
            .inspect_err(|e| {
                error!("Could not bind socket address {socket_addr}. Failed with {e}")
            })?;

        info!("Web server starting on http://{socket_addr}");
        select!(
            result = axum::serve(listener, router.into_make_service()).into_future().map(|result| result.map_err(anyhow::Error::new)) => {
                error!("Web server completed with {result:?}");
            }
            _ = subsys.on_shutdown_requested() => {
                info!("Web server shutdown");
            }
        );
        Ok(())
    }
}

pub async fn health_check_endpoint(
    State(_app_state): State<AppState>,
) -> Result<Json<String>, ClientError> {
    Ok(Json("Ok".to_owned()))
}
