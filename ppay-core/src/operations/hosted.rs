use kanau::processor::Processor;
use ppay_sdk::objects::HostedSession;
use serde::Serialize;

use crate::framework::GatewayProcessor;
use crate::gateway::GatewayError;

/// Upstream `POST /payments/hosted/create-session`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostedSession {
    pub order_code: String,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

impl Processor<CreateHostedSession> for GatewayProcessor {
    type Output = HostedSession;
    type Error = GatewayError;
    #[tracing::instrument(skip_all, err, name = "Upstream:CreateHostedSession")]
    async fn process(&self, request: CreateHostedSession) -> Result<HostedSession, GatewayError> {
        let body = serde_json::to_value(&request)?;
        let raw = self
            .gateway
            .post("/payments/hosted/create-session", &body)
            .await?;
        Ok(serde_json::from_value(raw)?)
    }
}

/// Upstream `GET /payments/hosted/session/{id}`. Returns the raw payload.
#[derive(Debug, Clone)]
pub struct GetHostedSession {
    pub session_id: String,
}

impl Processor<GetHostedSession> for GatewayProcessor {
    type Output = serde_json::Value;
    type Error = GatewayError;
    #[tracing::instrument(skip_all, err, name = "Upstream:GetHostedSession")]
    async fn process(&self, query: GetHostedSession) -> Result<serde_json::Value, GatewayError> {
        let path = format!(
            "/payments/hosted/session/{}",
            urlencoding::encode(&query.session_id)
        );
        self.gateway.get(&path).await
    }
}
