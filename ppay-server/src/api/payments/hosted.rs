use axum::{
    Json,
    extract::{Path, State},
};
use kanau::processor::Processor;
use ppay_core::envelope::hosted_session_data;
use ppay_core::operations::{CreateHostedSession, GetHostedSession};
use ppay_sdk::objects::{HostedPaymentRequest, HostedSession, HostedSessionData, ResponseEnvelope};
use serde_json::Value;

use crate::api::error::{ApiError, MISSING_ORDER_CODE, MISSING_SESSION_ID, MISSING_URLS};
use crate::api::extractors::JsonBody;
use crate::state::AppState;

/// Validate and forward a hosted session request.
pub(crate) async fn create(
    state: &AppState,
    request: HostedPaymentRequest,
) -> Result<HostedSession, ApiError> {
    if request.order_code.is_empty() {
        return Err(ApiError::validation(
            MISSING_ORDER_CODE,
            "orderCode is required",
        ));
    }
    if request.success_url.is_empty() || request.cancel_url.is_empty() {
        return Err(ApiError::validation(
            MISSING_URLS,
            "successUrl and cancelUrl are required",
        ));
    }

    tracing::info!(order_code = %request.order_code, "Creating hosted payment session");

    let session = state
        .processor()
        .await
        .process(CreateHostedSession {
            order_code: request.order_code,
            success_url: request.success_url,
            cancel_url: request.cancel_url,
            customer_email: request.customer_email,
        })
        .await?;

    tracing::info!(session_id = %session.session_id, "Hosted session created");
    Ok(session)
}

/// `POST /hosted/create-session`
pub(super) async fn create_hosted_session(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<HostedPaymentRequest>,
) -> Result<Json<ResponseEnvelope<HostedSessionData>>, ApiError> {
    let session = create(&state, request).await?;
    Ok(Json(ResponseEnvelope::ok(hosted_session_data(session))))
}

/// `GET /hosted/session/{session_id}`: raw upstream session status.
pub(super) async fn get_hosted_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ResponseEnvelope<Value>>, ApiError> {
    if session_id.trim().is_empty() {
        return Err(ApiError::validation(
            MISSING_SESSION_ID,
            "sessionId is required",
        ));
    }

    tracing::info!(%session_id, "Checking hosted session status");
    let payload = state
        .processor()
        .await
        .process(GetHostedSession { session_id })
        .await?;
    Ok(Json(ResponseEnvelope::ok(payload)))
}
