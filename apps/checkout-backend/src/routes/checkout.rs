use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::checkout::{compute_total, CheckoutRequest};
use crate::error::AppError;
use crate::extractors::ValidatedJson;

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub status: &'static str,
    pub total: f64,
}

async fn checkout(body: ValidatedJson<CheckoutRequest>) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let item_count = request.items.as_ref().map_or(0, Vec::len);

    let total = compute_total(&request)?;

    tracing::info!(item_count, total, "checkout.computed");

    Ok(HttpResponse::Ok().json(CheckoutResponse {
        status: "ok",
        total,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/checkout", web::post().to(checkout));
}
