//! Demo API handlers.
//!
//! Runs canned test scenarios through the payments service functions and
//! attaches suggested next steps to every answer. Any failure of the inner
//! payment call is reported as a 500 with a demo-specific code; the inner
//! error envelope travels in `details`.
//!
//! # Endpoints
//!
//! - `GET  /scenarios`            – list the test scenarios
//! - `POST /test-payment`         – run a scenario against an order
//! - `POST /check-payment-status`: re-check a payment intent
//! - `POST /test-hosted-payment`  – create a hosted checkout session

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod check_status;
mod hosted;
mod scenarios;
mod test_payment;

/// Build the Demo API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scenarios", get(scenarios::list_scenarios))
        .route("/test-payment", post(test_payment::test_payment))
        .route(
            "/check-payment-status",
            post(check_status::check_payment_status),
        )
        .route("/test-hosted-payment", post(hosted::test_hosted_payment))
}
