//! Error body test helpers for backend testing
//!
//! The service's error contract is a JSON body with a single `error` key and
//! an `x-request-id` response header. These helpers assert that contract from
//! raw response parts, without depending on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local struct matching the backend's error body shape without depending on
/// backend types.
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    error: String,
}

/// Assert that response parts conform to the stable error contract:
/// - HTTP status matches expected
/// - body is `{"error": <non-empty string>}`
/// - `x-request-id` header is present and non-empty
///
/// Returns the error message for further assertions.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
) -> String {
    assert_eq!(status, expected_status);

    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id header should be present")
        .to_str()
        .expect("x-request-id header should be valid UTF-8");
    assert!(
        !request_id.is_empty(),
        "x-request-id header should not be empty"
    );

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("Response body should be valid UTF-8");
    let body: ErrorBodyLike =
        serde_json::from_str(&body_str).expect("Response body should be valid error JSON");

    assert!(!body.error.is_empty(), "error message should not be empty");

    body.error
}

/// Assert the error contract and that the message equals `expected_error`.
pub fn assert_error_body_equals(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_error: &str,
) {
    let error = assert_error_body_from_parts(status, headers, body_bytes, expected_status);
    assert_eq!(error, expected_error);
}

/// Assert the error contract and that the message contains `expected_fragment`.
pub fn assert_error_body_contains(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_fragment: &str,
) {
    let error = assert_error_body_from_parts(status, headers, body_bytes, expected_status);
    assert!(
        error.contains(expected_fragment),
        "Expected error to contain '{expected_fragment}', but got '{error}'"
    );
}
