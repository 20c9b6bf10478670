use kanau::processor::Processor;
use ppay_sdk::objects::PaymentHistoryQuery;

use crate::framework::GatewayProcessor;
use crate::gateway::GatewayError;

/// Upstream `GET /payments/history?...`. Returns the raw page.
#[derive(Debug, Clone)]
pub struct ListPaymentHistory {
    pub query: PaymentHistoryQuery,
}

impl Processor<ListPaymentHistory> for GatewayProcessor {
    type Output = serde_json::Value;
    type Error = GatewayError;
    #[tracing::instrument(skip_all, err, name = "Upstream:ListPaymentHistory")]
    async fn process(&self, list: ListPaymentHistory) -> Result<serde_json::Value, GatewayError> {
        let path = format!("/payments/history?{}", list.query.to_query_string());
        self.gateway.get(&path).await
    }
}
