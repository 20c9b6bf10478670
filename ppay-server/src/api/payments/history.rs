use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use kanau::processor::Processor;
use ppay_core::operations::ListPaymentHistory;
use ppay_sdk::objects::{PaymentHistoryQuery, ResponseEnvelope};
use serde_json::Value;

use crate::api::error::{ApiError, INVALID_QUERY};
use crate::state::AppState;

/// `GET /history`: paginated payment history.
///
/// `page` defaults to 1 and `limit` to 20, both forwarded verbatim; empty
/// filters are not forwarded.
pub(super) async fn list_payment_history(
    State(state): State<AppState>,
    query: Result<Query<PaymentHistoryQuery>, QueryRejection>,
) -> Result<Json<ResponseEnvelope<Value>>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::validation(INVALID_QUERY, rejection.body_text()))?;

    tracing::info!(page = %query.page, limit = %query.limit, "Fetching payment history");
    let page = state
        .processor()
        .await
        .process(ListPaymentHistory { query })
        .await?;

    let records = page
        .get("data")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    tracing::debug!(records, "Payment history retrieved");
    Ok(Json(ResponseEnvelope::ok(page)))
}
