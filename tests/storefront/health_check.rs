use axum::http::StatusCode;
use serial_test::serial;

use crate::test_utils::start_test_server;

#[tokio::test]
#[serial]
async fn the_webserver_responds_to_a_simple_get_request() {
    let (server_handle, _, client) = start_test_server().await;

    let res = client.do_get("/healthcheck").await.expect("Health check should succeed.");

    assert_eq!(res.status(), StatusCode::OK);
    server_handle.abort();
}
