use actix_web::web;

pub mod checkout;
pub mod health;

/// Configure application routes.
///
/// Both `CheckoutServer` and in-process test services register routes through
/// this function, so tests exercise exactly the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Checkout route: POST /checkout
    checkout::configure_routes(cfg);

    // Health check route: GET /health
    health::configure_routes(cfg);
}
