use axum::{
    Json,
    extract::{Path, State},
};
use kanau::processor::Processor;
use ppay_core::envelope::direct_payment_data;
use ppay_core::operations::{GetDirectPaymentStatus, ProcessDirectPayment};
use ppay_sdk::objects::{DirectPaymentData, DirectPaymentRequest, PaymentResult, ResponseEnvelope};
use serde_json::Value;

use crate::api::error::{ApiError, MISSING_ORDER_CODE, MISSING_PAYMENT_INTENT_ID, MISSING_PAYMENT_METHOD};
use crate::api::extractors::{ClientContext, JsonBody};
use crate::state::AppState;

/// Validate a direct payment request, fill in the caller defaults and
/// forward it upstream.
///
/// Shared with the demo API, which runs its scenarios through here.
pub(crate) async fn process(
    state: &AppState,
    request: DirectPaymentRequest,
    client: &ClientContext,
) -> Result<PaymentResult, ApiError> {
    if request.order_code.is_empty() {
        return Err(ApiError::validation(
            MISSING_ORDER_CODE,
            "orderCode is required",
        ));
    }
    let payment_method = request
        .payment_method
        .filter(|pm| !pm.token.is_empty())
        .ok_or_else(|| {
            ApiError::validation(MISSING_PAYMENT_METHOD, "paymentMethod.token is required")
        })?;

    let return_url = request
        .return_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| format!("{}/api/v1/payments/return", client.base_url));

    tracing::info!(order_code = %request.order_code, "Processing direct payment");

    let result = state
        .processor()
        .await
        .process(ProcessDirectPayment {
            order_code: request.order_code,
            payment_method,
            return_url,
            client_ip: request.client_ip.or_else(|| client.client_ip.clone()),
            user_agent: request.user_agent.or_else(|| client.user_agent.clone()),
        })
        .await?;

    tracing::info!(
        status = %result.status,
        payment_intent_id = %result.payment_intent_id,
        "Direct payment answered"
    );
    Ok(result)
}

/// Raw upstream status of a payment intent.
///
/// The router never yields an empty segment, but a blank one such as `%20`
/// still reaches here.
pub(crate) async fn status(state: &AppState, payment_intent_id: String) -> Result<Value, ApiError> {
    if payment_intent_id.trim().is_empty() {
        return Err(ApiError::validation(
            MISSING_PAYMENT_INTENT_ID,
            "paymentIntentId is required",
        ));
    }

    tracing::info!(%payment_intent_id, "Checking direct payment status");
    let payload = state
        .processor()
        .await
        .process(GetDirectPaymentStatus { payment_intent_id })
        .await?;
    tracing::debug!(status = ?payload.get("status"), "Payment status retrieved");
    Ok(payload)
}

/// `POST /direct/process`: charge a tokenized payment method.
///
/// Answers with the reshaped result; 3D Secure details are only included
/// when authentication is required.
pub(super) async fn process_direct_payment(
    State(state): State<AppState>,
    client: ClientContext,
    JsonBody(request): JsonBody<DirectPaymentRequest>,
) -> Result<Json<ResponseEnvelope<DirectPaymentData>>, ApiError> {
    let result = process(&state, request, &client).await?;
    Ok(Json(ResponseEnvelope::ok(direct_payment_data(&result))))
}

/// `GET /direct/status/{payment_intent_id}`
pub(super) async fn get_direct_payment_status(
    State(state): State<AppState>,
    Path(payment_intent_id): Path<String>,
) -> Result<Json<ResponseEnvelope<Value>>, ApiError> {
    let payload = status(&state, payment_intent_id).await?;
    Ok(Json(ResponseEnvelope::ok(payload)))
}
