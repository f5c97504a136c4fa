#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error as ActixError};
use checkout_backend::middleware::RequestTrace;
use checkout_backend::routes;
use serde_json::Value;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    checkout_test_support::logging::init();
}

/// Build an initialized test service wired with the production routes and
/// the RequestTrace middleware, exactly as `CheckoutServer` wires them.
pub async fn init_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(App::new().wrap(RequestTrace).configure(routes::configure)).await
}

/// POST a JSON payload to /checkout and return (status, headers, body bytes).
pub async fn post_checkout<S>(
    app: &S,
    payload: Value,
) -> (
    actix_web::http::StatusCode,
    actix_web::http::header::HeaderMap,
    actix_web::web::Bytes,
)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
{
    let req = test::TestRequest::post()
        .uri("/checkout")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(app, req).await;

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    (status, headers, body)
}
