use axum::Json;
use ppay_core::scenarios;
use ppay_sdk::objects::{ResponseEnvelope, ScenarioCatalog};

/// `GET /scenarios`
pub(super) async fn list_scenarios() -> Json<ResponseEnvelope<ScenarioCatalog>> {
    Json(ResponseEnvelope::ok(scenarios::catalog()))
}
