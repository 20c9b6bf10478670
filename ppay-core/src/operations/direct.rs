use kanau::processor::Processor;
use ppay_sdk::objects::{PaymentMethod, PaymentResult};
use serde::Serialize;

use crate::framework::GatewayProcessor;
use crate::gateway::GatewayError;

/// Upstream `POST /payments/direct/process`.
///
/// All fields are already validated and defaulted by the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDirectPayment {
    pub order_code: String,
    pub payment_method: PaymentMethod,
    pub return_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Processor<ProcessDirectPayment> for GatewayProcessor {
    type Output = PaymentResult;
    type Error = GatewayError;
    #[tracing::instrument(skip_all, err, name = "Upstream:ProcessDirectPayment")]
    async fn process(&self, request: ProcessDirectPayment) -> Result<PaymentResult, GatewayError> {
        let body = serde_json::to_value(&request)?;
        let raw = self.gateway.post("/payments/direct/process", &body).await?;
        Ok(serde_json::from_value(raw)?)
    }
}

/// Upstream `GET /payments/direct/status/{id}`. Returns the raw payload.
#[derive(Debug, Clone)]
pub struct GetDirectPaymentStatus {
    pub payment_intent_id: String,
}

impl Processor<GetDirectPaymentStatus> for GatewayProcessor {
    type Output = serde_json::Value;
    type Error = GatewayError;
    #[tracing::instrument(skip_all, err, name = "Upstream:GetDirectPaymentStatus")]
    async fn process(
        &self,
        query: GetDirectPaymentStatus,
    ) -> Result<serde_json::Value, GatewayError> {
        let path = format!(
            "/payments/direct/status/{}",
            urlencoding::encode(&query.payment_intent_id)
        );
        self.gateway.get(&path).await
    }
}
