//! Partner demo API request and response types.
//!
//! The demo endpoints drive the payment endpoints with canned test
//! payment methods and attach suggested next steps to every answer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::hosted::HostedSessionData;
use super::null_as_default;
use super::payment::{DirectPaymentData, PaymentMethod};

/// A named test scenario pairing a description with a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: String,
    pub description: String,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioUsage {
    pub description: String,
    pub steps: Vec<String>,
}

/// `data` of `GET /demo/scenarios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    pub scenarios: BTreeMap<String, Scenario>,
    pub usage: ScenarioUsage,
}

/// Scenario header echoed back by the demo runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPaymentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scenario: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPaymentData {
    pub scenario: ScenarioSummary,
    pub payment: DirectPaymentData,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPaymentStatusRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_intent_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPaymentStatusData {
    /// Status payload exactly as the upstream returned it.
    pub payment: serde_json::Value,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestHostedPaymentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestHostedPaymentData {
    pub scenario: ScenarioSummary,
    pub session: HostedSessionData,
    pub next_steps: Vec<String>,
}
