use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use serial_test::serial;

use crate::test_utils::{POUR_OVER, WEEKENDER, add_item, create_session, decimal, start_test_server};

fn shipping() -> Value {
    json!({
        "full_name": "Grace Hopper",
        "email": "grace@example.com",
        "address": "1 Navy Way",
        "city": "Arlington",
        "state": "VA",
        "postal_code": "22202",
        "country": "US"
    })
}

fn card(number: &str) -> Value {
    json!({
        "method": "card",
        "card_number": number,
        "expiry": "09/31",
        "cvc": "737",
        "cardholder_name": "Grace Hopper"
    })
}

/// Declined payment, back to shipping, resubmit, pay, confirm.
#[tokio::test]
#[serial]
async fn checkout_recovers_from_decline_and_places_order() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;
    add_item(&client, &session_id, WEEKENDER).await;
    add_item(&client, &session_id, WEEKENDER).await;

    let res = client
        .do_post(&format!("/sessions/{session_id}/checkout"), json!({}))
        .await
        .expect("Expected checkout to begin.");
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json_body().expect("Expected JSON body.")["stage"], json!("shipping"));

    let checkout = client
        .do_post(&format!("/sessions/{session_id}/checkout/shipping"), shipping())
        .await
        .expect("Expected shipping to be accepted.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(checkout["stage"], json!("payment"));
    assert_eq!(decimal(&checkout["totals"]["shipping_cost"]), Decimal::ZERO);
    assert_eq!(decimal(&checkout["totals"]["total"]), Decimal::from(218));

    let res = client
        .do_post(
            &format!("/sessions/{session_id}/checkout/payment"),
            card("4000 0000 0000 0002"),
        )
        .await
        .expect("Expected payment request to complete.");
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let message = res.json_body().expect("Expected JSON body.")["message"].clone();
    assert_eq!(message, json!("Payment failed: card declined"));

    let checkout = client
        .do_get(&format!("/sessions/{session_id}/checkout"))
        .await
        .expect("Expected checkout lookup to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(checkout["stage"], json!("payment"));
    assert_eq!(checkout["last_error"], json!("card declined"));

    let checkout = client
        .do_post(&format!("/sessions/{session_id}/checkout/back"), json!({}))
        .await
        .expect("Expected back navigation to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(checkout["stage"], json!("shipping"));
    assert_eq!(checkout["shipping"], shipping());

    client
        .do_post(&format!("/sessions/{session_id}/checkout/shipping"), shipping())
        .await
        .expect("Expected shipping to be accepted.");
    let checkout = client
        .do_post(
            &format!("/sessions/{session_id}/checkout/payment"),
            card("4242 4242 4242 4242"),
        )
        .await
        .expect("Expected payment to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(checkout["stage"], json!("confirmation"));
    assert_eq!(checkout["payment"]["card_last4"], json!("4242"));

    let res = client
        .do_post(&format!("/sessions/{session_id}/checkout/confirm"), json!({}))
        .await
        .expect("Expected order to be placed.");
    assert_eq!(res.status(), StatusCode::OK);
    let placed = res.json_body().expect("Expected JSON body.");
    assert_eq!(placed["checkout"]["stage"], json!("complete"));
    assert!(
        placed["confirmation"]["order_number"]
            .as_str()
            .is_some_and(|number| number.starts_with("ORD-"))
    );
    assert_eq!(decimal(&placed["confirmation"]["total"]), Decimal::from(218));

    let cart = client
        .do_get(&format!("/sessions/{session_id}/cart"))
        .await
        .expect("Expected cart lookup to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(cart["items"], json!([]));

    server_handle.abort();
}

#[tokio::test]
#[serial]
async fn small_order_pays_shipping_and_cart_changes_block_confirmation() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;
    add_item(&client, &session_id, POUR_OVER).await;

    client
        .do_post(&format!("/sessions/{session_id}/checkout"), json!({}))
        .await
        .expect("Expected checkout to begin.");
    let checkout = client
        .do_post(&format!("/sessions/{session_id}/checkout/shipping"), shipping())
        .await
        .expect("Expected shipping to be accepted.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(decimal(&checkout["totals"]["shipping_cost"]), Decimal::TEN);
    assert_eq!(decimal(&checkout["totals"]["total"]), Decimal::from(58));

    client
        .do_post(
            &format!("/sessions/{session_id}/checkout/payment"),
            card("4242424242424242"),
        )
        .await
        .expect("Expected payment to succeed.");

    add_item(&client, &session_id, POUR_OVER).await;
    let res = client
        .do_post(&format!("/sessions/{session_id}/checkout/confirm"), json!({}))
        .await
        .expect("Expected confirm request to complete.");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let cart = client
        .do_get(&format!("/sessions/{session_id}/cart"))
        .await
        .expect("Expected cart lookup to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(cart["total_quantity"], json!(2));

    server_handle.abort();
}

#[tokio::test]
#[serial]
async fn checkout_rules_are_enforced_over_http() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;

    let res = client
        .do_post(&format!("/sessions/{session_id}/checkout"), json!({}))
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    add_item(&client, &session_id, WEEKENDER).await;
    client
        .do_post(&format!("/sessions/{session_id}/checkout"), json!({}))
        .await
        .expect("Expected checkout to begin.");

    let res = client
        .do_post(
            &format!("/sessions/{session_id}/checkout/payment"),
            card("4242424242424242"),
        )
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .do_delete(&format!("/sessions/{session_id}/checkout"))
        .await
        .expect("Expected abandon to succeed.");
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .do_get(&format!("/sessions/{session_id}/checkout"))
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server_handle.abort();
}
