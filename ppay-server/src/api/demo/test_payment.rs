use axum::{Json, extract::State};
use ppay_core::advisor::next_steps;
use ppay_core::envelope::direct_payment_data;
use ppay_core::scenarios;
use ppay_sdk::objects::{DirectPaymentRequest, ResponseEnvelope, TestPaymentData, TestPaymentRequest};

use crate::api::error::{ApiError, INVALID_SCENARIO, MISSING_REQUIRED_FIELDS, TEST_PAYMENT_FAILED};
use crate::api::extractors::{ClientContext, JsonBody};
use crate::api::payments::direct;
use crate::state::AppState;

/// `POST /test-payment`: run a named scenario against an order.
///
/// The scenario's payment method is sent through the direct payment flow
/// with the return URL pointing back at this server.
pub(super) async fn test_payment(
    State(state): State<AppState>,
    client: ClientContext,
    JsonBody(request): JsonBody<TestPaymentRequest>,
) -> Result<Json<ResponseEnvelope<TestPaymentData>>, ApiError> {
    if request.scenario.is_empty() || request.order_code.is_empty() {
        return Err(ApiError::validation(
            MISSING_REQUIRED_FIELDS,
            "scenario and orderCode are required",
        ));
    }
    let scenario = scenarios::find(&request.scenario).ok_or_else(|| {
        ApiError::validation(
            INVALID_SCENARIO,
            format!("Invalid scenario. Available scenarios: {}", scenarios::ids()),
        )
    })?;

    tracing::info!(
        scenario = scenario.id,
        order_code = %request.order_code,
        "Running test payment"
    );

    let payment = DirectPaymentRequest {
        order_code: request.order_code,
        payment_method: Some(scenario.payment_method()),
        return_url: None,
        client_ip: None,
        user_agent: None,
    };
    let result = direct::process(&state, payment, &client)
        .await
        .map_err(|e| e.into_demo(TEST_PAYMENT_FAILED, "Failed to execute test payment"))?;

    Ok(Json(ResponseEnvelope::ok(TestPaymentData {
        scenario: scenario.summary(),
        payment: direct_payment_data(&result),
        next_steps: next_steps(&result),
    })))
}
