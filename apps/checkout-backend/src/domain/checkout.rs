//! Cart validation and total computation.
//!
//! This module is HTTP-agnostic. Handlers convert [`CheckoutError`] into
//! `crate::error::AppError` via the provided `From` implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single cart line as submitted by the client.
///
/// `name` is display-only and carried through untouched. `quantity` is signed
/// on purpose: a negative value must reach our validator so the client gets a
/// descriptive message instead of an opaque deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Typed request schema for `POST /checkout`.
///
/// `items` deserializes as `Option` so that a payload without the key
/// surfaces as [`CheckoutError::MissingItems`] rather than a serde type
/// error.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
}

/// Validation failures for a checkout payload, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("missing items field")]
    MissingItems,
    #[error("empty cart")]
    EmptyCart,
    #[error("item {index}: price must be a finite non-negative number")]
    InvalidPrice { index: usize },
    #[error("item {index}: quantity must be non-negative")]
    InvalidQuantity { index: usize },
}

/// Validate a checkout payload and compute its total.
///
/// Validation order: missing `items` key, then empty cart, then per-item
/// price/quantity checks in submission order. Zero-price or zero-quantity
/// items are valid and contribute 0.
pub fn compute_total(request: &CheckoutRequest) -> Result<f64, CheckoutError> {
    let items = request.items.as_ref().ok_or(CheckoutError::MissingItems)?;

    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut total = 0.0_f64;
    for (index, item) in items.iter().enumerate() {
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(CheckoutError::InvalidPrice { index });
        }
        if item.quantity < 0 {
            return Err(CheckoutError::InvalidQuantity { index });
        }
        total += item.price * item.quantity as f64;
    }

    Ok(total)
}
