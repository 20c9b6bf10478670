//! Direct payment request and result types.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Status of a payment intent as reported by the upstream gateway.
///
/// Unrecognized values are kept verbatim in [`PaymentStatus::Other`] so
/// that newer upstream statuses survive a round trip through this API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Succeeded,
    RequiresAction,
    RequiresPaymentMethod,
    Processing,
    Canceled,
    Failed,
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::RequiresAction => "requires_action",
            PaymentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "succeeded" => PaymentStatus::Succeeded,
            "requires_action" => PaymentStatus::RequiresAction,
            "requires_payment_method" => PaymentStatus::RequiresPaymentMethod,
            "processing" => PaymentStatus::Processing,
            "canceled" => PaymentStatus::Canceled,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Other(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment processor that handled the intent upstream.
///
/// Processors added upstream later land in [`GatewayProvider::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GatewayProvider {
    Stripe,
    Adyen,
    Other(String),
}

impl From<String> for GatewayProvider {
    fn from(value: String) -> Self {
        match value.as_str() {
            "STRIPE" => GatewayProvider::Stripe,
            "ADYEN" => GatewayProvider::Adyen,
            _ => GatewayProvider::Other(value),
        }
    }
}

impl From<GatewayProvider> for String {
    fn from(value: GatewayProvider) -> Self {
        match value {
            GatewayProvider::Stripe => "STRIPE".to_owned(),
            GatewayProvider::Adyen => "ADYEN".to_owned(),
            GatewayProvider::Other(raw) => raw,
        }
    }
}

/// How the 3D Secure challenge is presented to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThreeDSecureType {
    Form,
    Redirect,
    Iframe,
    Other(String),
}

impl From<String> for ThreeDSecureType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FORM" => ThreeDSecureType::Form,
            "REDIRECT" => ThreeDSecureType::Redirect,
            "IFRAME" => ThreeDSecureType::Iframe,
            _ => ThreeDSecureType::Other(value),
        }
    }
}

impl From<ThreeDSecureType> for String {
    fn from(value: ThreeDSecureType) -> Self {
        match value {
            ThreeDSecureType::Form => "FORM".to_owned(),
            ThreeDSecureType::Redirect => "REDIRECT".to_owned(),
            ThreeDSecureType::Iframe => "IFRAME".to_owned(),
            ThreeDSecureType::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[default]
    Card,
    Wallet,
    BankTransfer,
}

/// Tokenized payment method supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: PaymentMethodType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
}

impl PaymentMethod {
    /// A card payment method carrying only a token.
    pub fn card(token: impl Into<String>) -> Self {
        Self {
            kind: PaymentMethodType::Card,
            token: token.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /payments/direct/process`.
///
/// `return_url`, `client_ip` and `user_agent` are filled in by the server
/// from the inbound request when left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectPaymentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// 3D Secure challenge details attached to a `requires_action` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureInfo {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ThreeDSecureType>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(
        default,
        alias = "paymentIntentClientSecret",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_secret: Option<String>,
}

/// Decline or processing error reported for a failed payment.
///
/// Fields beyond the known ones are kept in `extra` and forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub receipt_url: Option<String>,
}

/// A payment attempt as reported by the upstream gateway.
///
/// Read-only to this system: it is decoded, reshaped and forwarded. Only
/// `status` is required; `order` is carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    #[serde(default)]
    pub payment_intent_id: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewayProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_d_secure: Option<ThreeDSecureInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<PaymentError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

/// Partner-facing summary of the 3D Secure requirement.
///
/// `required` is always present; the remaining fields are only set when
/// authentication is actually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecureSummary {
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ThreeDSecureType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

/// `data` of a successful `POST /payments/direct/process` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectPaymentData {
    pub payment_intent_id: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewayProvider>,
    pub three_d_secure: ThreeDSecureSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<PaymentError>,
}
