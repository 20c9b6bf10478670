//! HTTP API mounted under `/api/v1`.

use axum::Router;

use crate::state::AppState;

mod demo;
pub mod error;
mod extractors;
mod payments;

#[cfg(test)]
mod tests;

pub use error::ApiError;

/// Build the `/api/v1` router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/payments", payments::router())
        .nest("/demo", demo::router())
}
