//! Validation failures for `POST /checkout`: every case must produce HTTP 400
//! with the stable `{"error": ...}` body and an `x-request-id` header.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use checkout_test_support::error_body::{
    assert_error_body_contains, assert_error_body_equals, assert_error_body_from_parts,
};
use serde_json::json;

#[actix_web::test]
async fn empty_cart_is_rejected() {
    let app = common::init_app().await;

    let (status, headers, body) = common::post_checkout(&app, json!({"items": []})).await;

    assert_error_body_equals(status, &headers, &body, StatusCode::BAD_REQUEST, "empty cart");
}

#[actix_web::test]
async fn missing_items_field_is_rejected() {
    let app = common::init_app().await;

    let (status, headers, body) =
        common::post_checkout(&app, json!({"other_field": "value"})).await;

    assert_error_body_equals(
        status,
        &headers,
        &body,
        StatusCode::BAD_REQUEST,
        "missing items field",
    );
}

#[actix_web::test]
async fn negative_price_is_rejected() {
    let app = common::init_app().await;

    let payload = json!({
        "items": [
            {"name": "ok", "price": 5, "quantity": 1},
            {"name": "bad", "price": -1.50, "quantity": 2}
        ]
    });

    let (status, headers, body) = common::post_checkout(&app, payload).await;

    assert_error_body_contains(status, &headers, &body, StatusCode::BAD_REQUEST, "price");
}

#[actix_web::test]
async fn negative_quantity_is_rejected() {
    let app = common::init_app().await;

    let payload = json!({
        "items": [{"name": "bad", "price": 5, "quantity": -3}]
    });

    let (status, headers, body) = common::post_checkout(&app, payload).await;

    assert_error_body_contains(status, &headers, &body, StatusCode::BAD_REQUEST, "quantity");
}

#[actix_web::test]
async fn non_numeric_price_is_rejected() {
    let app = common::init_app().await;

    let payload = json!({
        "items": [{"name": "bad", "price": "a lot", "quantity": 1}]
    });

    let (status, headers, body) = common::post_checkout(&app, payload).await;

    assert_error_body_contains(
        status,
        &headers,
        &body,
        StatusCode::BAD_REQUEST,
        "invalid JSON",
    );
}

#[actix_web::test]
async fn malformed_json_body_is_rejected() {
    let app = common::init_app().await;

    let req = test::TestRequest::post()
        .uri("/checkout")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"items\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, StatusCode::BAD_REQUEST);
}
