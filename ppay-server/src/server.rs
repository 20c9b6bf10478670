//! Axum server setup and router configuration.

use crate::api::{self, ApiError};
use crate::shutdown::shutdown_signal;
use crate::state::AppState;
use axum::{Json, Router, extract::OriginalUri, response::IntoResponse, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the main application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health check endpoint
        .route("/health", get(health_check))
        .nest("/api/v1", api::router())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Add state to all routes
        .with_state(state)
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn root() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Partner Payment Integration Sample",
    })
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Simple health check - returns OK if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(uri.to_string())
}

/// Serve on an already bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
}

/// Run the server with graceful shutdown support.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    serve(listener, router).await
}
