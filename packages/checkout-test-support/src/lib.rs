//! Checkout backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization and error-body assertion helpers shared by unit
//! and integration tests.

pub mod error_body;
pub mod logging;
