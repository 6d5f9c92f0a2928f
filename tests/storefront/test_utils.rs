use std::{str::FromStr, time::Duration};

use axum::http::StatusCode;
use httpc_test::Client;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use storefront_core::{
    AppState, construct_app_state, infra::get_config_settings_for, start_server,
};
use tokio::task::JoinHandle;

/// Product ids from `config/catalog.json`.
pub const WEEKENDER: &str = "0192f1a0-6a1e-7c3a-9d2b-1f0e4a5b6c01";
pub const POUR_OVER: &str = "0192f1a0-6a1e-7c3a-9d2b-1f0e4a5b6c03";
pub const DESK_LAMP: &str = "0192f1a0-6a1e-7c3a-9d2b-1f0e4a5b6c04";

/// Asks the OS for a port nobody is listening on.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("Expected a free local port.")
}

/// Starts the server with the `test` settings on a free port and waits until it answers health
/// checks.
pub async fn start_test_server() -> (JoinHandle<Result<(), anyhow::Error>>, AppState, Client) {
    let mut settings =
        get_config_settings_for("test").expect("Could not read application configuration.");
    settings.application.port = free_port();
    settings.sandbox.payment_latency_ms = 0;
    settings.sandbox.order_latency_ms = 0;
    let app_state = construct_app_state(settings).expect("Expected AppState to be created.");
    let server_handle = tokio::task::spawn(start_server(app_state.clone()));

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");
    for _ in 0..100 {
        if let Ok(res) = client.do_get("/healthcheck").await {
            if res.status() == StatusCode::OK {
                return (server_handle, app_state, client);
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("Test server did not become healthy.");
}

pub async fn create_session(client: &Client) -> String {
    let res = client
        .do_post("/sessions", json!({}))
        .await
        .expect("Expected session to be created.");
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json_body().expect("Expected JSON body.");
    body["session_id"]
        .as_str()
        .expect("Expected session_id.")
        .to_owned()
}

pub async fn add_item(client: &Client, session_id: &str, product_id: &str) -> Value {
    let res = client
        .do_post(
            &format!("/sessions/{session_id}/cart/add"),
            json!({ "product_id": product_id }),
        )
        .await
        .expect("Expected add item request to succeed.");
    assert_eq!(res.status(), StatusCode::OK);
    res.json_body().expect("Expected JSON body.")
}

pub fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("Expected a decimal string."))
        .expect("Expected a valid decimal.")
}
