use axum::{Json, extract::State};
use ppay_core::advisor::next_steps;
use ppay_sdk::objects::{
    CheckPaymentStatusData, CheckPaymentStatusRequest, PaymentResult, ResponseEnvelope,
};
use serde::Deserialize;

use crate::api::error::{ApiError, CHECK_PAYMENT_STATUS_FAILED, MISSING_REQUIRED_FIELDS};
use crate::api::extractors::JsonBody;
use crate::api::payments::direct;
use crate::state::AppState;

const FAILED_MESSAGE: &str = "Failed to check payment status";

/// `POST /check-payment-status`
///
/// Returns the upstream status payload untouched plus the next steps for
/// it. Only a payload without a `status` counts as a failure.
pub(super) async fn check_payment_status(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CheckPaymentStatusRequest>,
) -> Result<Json<ResponseEnvelope<CheckPaymentStatusData>>, ApiError> {
    if request.payment_intent_id.trim().is_empty() {
        return Err(ApiError::validation(
            MISSING_REQUIRED_FIELDS,
            "paymentIntentId is required",
        ));
    }

    tracing::info!(payment_intent_id = %request.payment_intent_id, "Demo status check");

    let payment = direct::status(&state, request.payment_intent_id)
        .await
        .map_err(|e| e.into_demo(CHECK_PAYMENT_STATUS_FAILED, FAILED_MESSAGE))?;

    let result = PaymentResult::deserialize(&payment).map_err(|e| {
        tracing::error!(error = %e, "Status payload carries no payment status");
        ApiError::Demo {
            code: CHECK_PAYMENT_STATUS_FAILED,
            message: FAILED_MESSAGE,
            details: Some(serde_json::Value::String(e.to_string())),
        }
    })?;

    Ok(Json(ResponseEnvelope::ok(CheckPaymentStatusData {
        next_steps: next_steps(&result),
        payment,
    })))
}
