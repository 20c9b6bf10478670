//! Classification of upstream failures into partner-facing errors.
//!
//! Every payment endpoint maps a [`GatewayError`] through [`classify`], so
//! "upstream answered with an error" and "upstream could not be reached"
//! are told apart the same way everywhere.

use serde_json::Value;

use crate::gateway::GatewayError;

pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
pub const NETWORK_ERROR: &str = "NETWORK_ERROR";

/// HTTP status, error code and message an upstream failure is reported as.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorClass {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}

/// Map an upstream failure onto the partner error taxonomy.
///
/// | failure | status | code |
/// |---|---|---|
/// | upstream non-2xx | upstream status | `API_ERROR_<status>` |
/// | connection refused / DNS | 503 | `SERVICE_UNAVAILABLE` |
/// | anything else | 500 | `NETWORK_ERROR` |
pub fn classify(err: &GatewayError) -> ErrorClass {
    match err {
        GatewayError::Api { status, body } => ErrorClass {
            status: *status,
            code: format!("API_ERROR_{status}"),
            message: upstream_message(body).unwrap_or_else(|| "API request failed".to_owned()),
            details: Some(body.clone()),
        },
        GatewayError::Unreachable(_) => ErrorClass {
            status: 503,
            code: SERVICE_UNAVAILABLE.to_owned(),
            message: "Payment service is currently unavailable".to_owned(),
            details: None,
        },
        GatewayError::Network(_) | GatewayError::Decode(_) => ErrorClass {
            status: 500,
            code: NETWORK_ERROR.to_owned(),
            message: "Unable to connect to payment service".to_owned(),
            details: None,
        },
    }
}

/// Pull a readable message out of an upstream error body.
fn upstream_message(body: &Value) -> Option<String> {
    let message = match body {
        Value::String(text) => Some(text.as_str()),
        Value::Object(map) => map
            .get("error")
            .and_then(|e| e.get("message"))
            .or_else(|| map.get("message"))
            .and_then(Value::as_str),
        _ => None,
    }?;
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_owned())
}
