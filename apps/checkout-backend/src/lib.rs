#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod telemetry;

// Re-exports for public API
pub use config::http::HttpConfig;
pub use domain::checkout::{compute_total, CartItem, CheckoutError, CheckoutRequest};
pub use error::AppError;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::request_trace::RequestTrace;
pub use server::CheckoutServer;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::http::*;
    pub use super::domain::checkout::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::server::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    checkout_test_support::logging::init();
}
