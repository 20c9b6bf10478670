//! Error type shared by every API handler.
//!
//! All failures are rendered as a `{ success: false, error: {...} }`
//! envelope. Upstream failures go through [`classify`] so the payment and
//! demo endpoints report them identically.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ppay_core::error::classify;
use ppay_core::gateway::GatewayError;
use ppay_sdk::objects::ResponseEnvelope;
use serde_json::Value;

pub const MISSING_ORDER_CODE: &str = "MISSING_ORDER_CODE";
pub const MISSING_PAYMENT_METHOD: &str = "MISSING_PAYMENT_METHOD";
pub const MISSING_URLS: &str = "MISSING_URLS";
pub const MISSING_PAYMENT_INTENT_ID: &str = "MISSING_PAYMENT_INTENT_ID";
pub const MISSING_SESSION_ID: &str = "MISSING_SESSION_ID";
pub const MISSING_REQUIRED_FIELDS: &str = "MISSING_REQUIRED_FIELDS";
pub const INVALID_SCENARIO: &str = "INVALID_SCENARIO";
pub const INVALID_REQUEST_BODY: &str = "INVALID_REQUEST_BODY";
pub const INVALID_QUERY: &str = "INVALID_QUERY";
pub const NOT_FOUND: &str = "NOT_FOUND";

pub const TEST_PAYMENT_FAILED: &str = "TEST_PAYMENT_FAILED";
pub const CHECK_PAYMENT_STATUS_FAILED: &str = "CHECK_PAYMENT_STATUS_FAILED";
pub const TEST_HOSTED_PAYMENT_FAILED: &str = "TEST_HOSTED_PAYMENT_FAILED";

/// Errors that can occur in API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field is missing or a value is not acceptable. Always
    /// raised before any upstream call.
    #[error("{message}")]
    Validation { code: &'static str, message: String },

    /// The upstream call failed.
    #[error(transparent)]
    Upstream(#[from] GatewayError),

    /// A demo endpoint's inner payment call failed.
    #[error("{message}")]
    Demo {
        code: &'static str,
        message: &'static str,
        /// Envelope of the inner failure.
        details: Option<Value>,
    },

    #[error("Not Found - {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            code,
            message: message.into(),
        }
    }

    /// Wrap this error as the failure of a demo endpoint, keeping the
    /// envelope it would have produced as `details`.
    pub fn into_demo(self, code: &'static str, message: &'static str) -> Self {
        let (_, inner) = self.render();
        tracing::error!(error = %self, code, "Demo call failed");
        ApiError::Demo {
            code,
            message,
            details: serde_json::to_value(inner).ok(),
        }
    }

    fn render(&self) -> (StatusCode, ResponseEnvelope<()>) {
        match self {
            ApiError::Validation { code, message } => (
                StatusCode::BAD_REQUEST,
                ResponseEnvelope::failure(*code, message.as_str(), None),
            ),
            ApiError::Upstream(e) => {
                let class = classify(e);
                let status =
                    StatusCode::from_u16(class.status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    ResponseEnvelope::failure(class.code, class.message, class.details),
                )
            }
            ApiError::Demo {
                code,
                message,
                details,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseEnvelope::failure(*code, *message, details.clone()),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ResponseEnvelope::failure(NOT_FOUND, self.to_string(), None),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Upstream(e) => tracing::error!(error = %e, "Upstream API error"),
            ApiError::Validation { code, message } => {
                tracing::debug!(code, %message, "Rejected request")
            }
            // Already logged by `into_demo`.
            ApiError::Demo { .. } | ApiError::NotFound(_) => {}
        }
        let (status, envelope) = self.render();
        (status, Json(envelope)).into_response()
    }
}
