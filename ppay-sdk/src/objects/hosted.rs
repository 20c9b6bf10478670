//! Hosted checkout session types.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Body of `POST /payments/hosted/create-session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedPaymentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Session as created by the upstream gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedSession {
    pub session_id: String,
    pub checkout_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<serde_json::Value>,
}

/// `data` of a successful `POST /payments/hosted/create-session` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedSessionData {
    pub session_id: String,
    /// Checkout page the customer is redirected to.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<serde_json::Value>,
}
