use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use serial_test::serial;

use crate::test_utils::{
    DESK_LAMP, POUR_OVER, WEEKENDER, add_item, create_session, decimal, start_test_server,
};

/// Adds up to the stock ceiling, tries once more, then takes units back out.
#[tokio::test]
#[serial]
async fn cart_respects_stock_ceiling_and_removes_per_unit() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;

    let first = add_item(&client, &session_id, POUR_OVER).await;
    assert_eq!(first["outcome"], json!({ "status": "added", "quantity": 1 }));
    // Discount above list price is ignored.
    assert_eq!(decimal(&first["cart"]["items"][0]["price"]), Decimal::from(48));

    add_item(&client, &session_id, POUR_OVER).await;
    let third = add_item(&client, &session_id, POUR_OVER).await;
    assert_eq!(third["outcome"], json!({ "status": "at_capacity" }));
    assert_eq!(third["cart"]["total_quantity"], json!(2));
    assert_eq!(decimal(&third["cart"]["total_amount"]), Decimal::from(96));

    let listing = client
        .do_get(&format!("/sessions/{session_id}/products/{POUR_OVER}"))
        .await
        .expect("Expected product lookup to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(listing["stock"]["available"], json!(0));
    assert_eq!(listing["stock"]["is_out_of_stock"], json!(true));

    let removed = client
        .do_post(
            &format!("/sessions/{session_id}/cart/remove"),
            json!({ "product_id": POUR_OVER }),
        )
        .await
        .expect("Expected remove to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(removed["outcome"], json!({ "status": "decremented", "quantity": 1 }));
    assert_eq!(decimal(&removed["cart"]["total_amount"]), Decimal::from(48));

    let removed = client
        .do_post(
            &format!("/sessions/{session_id}/cart/remove"),
            json!({ "product_id": POUR_OVER }),
        )
        .await
        .expect("Expected remove to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(removed["outcome"], json!({ "status": "removed" }));
    assert_eq!(removed["cart"]["items"], json!([]));
    assert_eq!(removed["cart"]["total_quantity"], json!(0));

    server_handle.abort();
}

#[tokio::test]
#[serial]
async fn product_listing_reflects_cart_and_discounts() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;

    let added = add_item(&client, &session_id, WEEKENDER).await;
    assert_eq!(decimal(&added["cart"]["total_amount"]), Decimal::from(109));
    let lamp = add_item(&client, &session_id, DESK_LAMP).await;
    assert_eq!(lamp["outcome"], json!({ "status": "at_capacity" }));

    let listings = client
        .do_get(&format!("/sessions/{session_id}/products"))
        .await
        .expect("Expected product listing to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    let listings = listings.as_array().expect("Expected an array of products.");
    assert_eq!(listings.len(), 5);

    let weekender = &listings[0];
    assert_eq!(decimal(&weekender["effective_price"]), Decimal::from(109));
    assert_eq!(weekender["stock"]["in_cart"], json!(1));
    assert_eq!(weekender["stock"]["available"], json!(3));

    // No stock figure in the catalog means nothing can be added.
    let tea_towels = &listings[4];
    assert_eq!(tea_towels["stock"]["is_out_of_stock"], json!(true));

    server_handle.abort();
}

#[tokio::test]
#[serial]
async fn clearing_empties_the_cart() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;
    add_item(&client, &session_id, WEEKENDER).await;
    add_item(&client, &session_id, POUR_OVER).await;

    let res = client
        .do_post(&format!("/sessions/{session_id}/cart/clear"), json!({}))
        .await
        .expect("Expected clear to succeed.");
    assert_eq!(res.status(), StatusCode::OK);

    let cart = client
        .do_get(&format!("/sessions/{session_id}/cart"))
        .await
        .expect("Expected cart lookup to succeed.")
        .json_body()
        .expect("Expected JSON body.");
    assert_eq!(cart["items"], json!([]));
    assert_eq!(decimal(&cart["total_amount"]), Decimal::ZERO);

    server_handle.abort();
}

#[tokio::test]
#[serial]
async fn unknown_sessions_and_products_are_not_found() {
    let (server_handle, _, client) = start_test_server().await;
    let session_id = create_session(&client).await;

    let res = client
        .do_post(
            &format!("/sessions/{session_id}/cart/add"),
            json!({ "product_id": uuid::Uuid::new_v4() }),
        )
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .do_get(&format!("/sessions/{}/cart", uuid::Uuid::now_v7()))
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .do_delete(&format!("/sessions/{session_id}"))
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client
        .do_get(&format!("/sessions/{session_id}/cart"))
        .await
        .expect("Expected request to complete.");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    server_handle.abort();
}
