//! Demo API client.
//!
//! Wraps the `/api/v1/demo` endpoints that run canned test scenarios
//! against the payment endpoints.

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_envelope};
use crate::objects::{
    CheckPaymentStatusData, CheckPaymentStatusRequest, ResponseEnvelope, ScenarioCatalog,
    TestHostedPaymentData, TestHostedPaymentRequest, TestPaymentData, TestPaymentRequest,
};

/// Typed HTTP client for the `/api/v1/demo` endpoints.
#[derive(Debug, Clone)]
pub struct DemoClient {
    http: Client,
    base_url: Url,
}

impl DemoClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET /api/v1/demo/scenarios`
    pub async fn scenarios(&self) -> Result<ResponseEnvelope<ScenarioCatalog>, ClientError> {
        let url = self.base_url.join("/api/v1/demo/scenarios")?;
        let resp = self.http.get(url).send().await?;
        parse_envelope(resp).await
    }

    /// `POST /api/v1/demo/test-payment`: run a named scenario for an order.
    pub async fn test_payment(
        &self,
        scenario: &str,
        order_code: &str,
    ) -> Result<ResponseEnvelope<TestPaymentData>, ClientError> {
        let body = TestPaymentRequest {
            scenario: scenario.to_owned(),
            order_code: order_code.to_owned(),
        };
        let url = self.base_url.join("/api/v1/demo/test-payment")?;
        let resp = self.http.post(url).json(&body).send().await?;
        parse_envelope(resp).await
    }

    /// `POST /api/v1/demo/check-payment-status`
    pub async fn check_payment_status(
        &self,
        payment_intent_id: &str,
    ) -> Result<ResponseEnvelope<CheckPaymentStatusData>, ClientError> {
        let body = CheckPaymentStatusRequest {
            payment_intent_id: payment_intent_id.to_owned(),
        };
        let url = self.base_url.join("/api/v1/demo/check-payment-status")?;
        let resp = self.http.post(url).json(&body).send().await?;
        parse_envelope(resp).await
    }

    /// `POST /api/v1/demo/test-hosted-payment`
    pub async fn test_hosted_payment(
        &self,
        order_code: &str,
    ) -> Result<ResponseEnvelope<TestHostedPaymentData>, ClientError> {
        let body = TestHostedPaymentRequest {
            order_code: order_code.to_owned(),
        };
        let url = self.base_url.join("/api/v1/demo/test-hosted-payment")?;
        let resp = self.http.post(url).json(&body).send().await?;
        parse_envelope(resp).await
    }
}
