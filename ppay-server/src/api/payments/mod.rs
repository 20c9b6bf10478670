//! Payments API handlers.
//!
//! Thin proxy over the upstream payment API. Every endpoint validates its
//! input, issues exactly one upstream call and answers with an envelope.
//!
//! # Endpoints
//!
//! - `POST /direct/process`               – charge a tokenized payment method
//! - `POST /begin`                        – alias of `/direct/process`
//! - `GET  /direct/status/{id}`           – raw upstream payment status
//! - `POST /hosted/create-session`        – create a hosted checkout session
//! - `GET  /hosted/session/{id}`          – raw upstream session status
//! - `GET  /history`                      – paginated payment history
//! - `GET  /return`                       – HTML landing page after 3D Secure

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub(crate) mod direct;
mod history;
pub(crate) mod hosted;
mod return_page;

/// Build the Payments API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/direct/process", post(direct::process_direct_payment))
        .route("/begin", post(direct::process_direct_payment))
        .route(
            "/direct/status/{payment_intent_id}",
            get(direct::get_direct_payment_status),
        )
        .route(
            "/hosted/create-session",
            post(hosted::create_hosted_session),
        )
        .route("/hosted/session/{session_id}", get(hosted::get_hosted_session))
        .route("/history", get(history::list_payment_history))
        .route("/return", get(return_page::payment_return))
}
