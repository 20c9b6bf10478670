use axum::{Json, extract::State};
use ppay_core::advisor::hosted_session_steps;
use ppay_core::envelope::hosted_session_data;
use ppay_core::scenarios::HOSTED_CHECKOUT;
use ppay_sdk::objects::{
    HostedPaymentRequest, ResponseEnvelope, TestHostedPaymentData, TestHostedPaymentRequest,
};

use crate::api::error::{ApiError, MISSING_REQUIRED_FIELDS, TEST_HOSTED_PAYMENT_FAILED};
use crate::api::extractors::{ClientContext, JsonBody};
use crate::api::payments::hosted;
use crate::state::AppState;

/// `POST /test-hosted-payment`
///
/// Success and cancel URLs point at the demo pages served next to this
/// API.
pub(super) async fn test_hosted_payment(
    State(state): State<AppState>,
    client: ClientContext,
    JsonBody(request): JsonBody<TestHostedPaymentRequest>,
) -> Result<Json<ResponseEnvelope<TestHostedPaymentData>>, ApiError> {
    if request.order_code.is_empty() {
        return Err(ApiError::validation(
            MISSING_REQUIRED_FIELDS,
            "orderCode is required",
        ));
    }

    tracing::info!(order_code = %request.order_code, "Running hosted payment test");

    let session = hosted::create(
        &state,
        HostedPaymentRequest {
            order_code: request.order_code,
            success_url: format!("{}/payment-success.html", client.base_url),
            cancel_url: format!("{}/payment-cancel.html", client.base_url),
            customer_email: None,
        },
    )
    .await
    .map_err(|e| e.into_demo(TEST_HOSTED_PAYMENT_FAILED, "Failed to create hosted payment session"))?;

    let session = hosted_session_data(session);
    Ok(Json(ResponseEnvelope::ok(TestHostedPaymentData {
        scenario: HOSTED_CHECKOUT.summary(),
        next_steps: hosted_session_steps(&session),
        session,
    })))
}
