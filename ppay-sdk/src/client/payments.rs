//! Payments API client (partner backend → this server).

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_envelope};
use crate::objects::{
    DirectPaymentData, DirectPaymentRequest, HostedPaymentRequest, HostedSessionData,
    PaymentHistoryQuery, ResponseEnvelope,
};

/// Typed HTTP client for the `/api/v1/payments` endpoints.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: Client,
    base_url: Url,
}

impl PaymentsClient {
    /// Create a new `PaymentsClient`.
    ///
    /// * `base_url`: root URL of the server (e.g. `http://localhost:5010`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `POST /api/v1/payments/direct/process`: charge a tokenized payment
    /// method.
    pub async fn process_direct_payment(
        &self,
        request: &DirectPaymentRequest,
    ) -> Result<ResponseEnvelope<DirectPaymentData>, ClientError> {
        let url = self.base_url.join("/api/v1/payments/direct/process")?;
        let resp = self.http.post(url).json(request).send().await?;
        parse_envelope(resp).await
    }

    /// `GET /api/v1/payments/direct/status/{payment_intent_id}`: raw
    /// upstream status of a payment intent.
    pub async fn direct_payment_status(
        &self,
        payment_intent_id: &str,
    ) -> Result<ResponseEnvelope<serde_json::Value>, ClientError> {
        let url = self.base_url.join(&format!(
            "/api/v1/payments/direct/status/{}",
            urlencoding::encode(payment_intent_id)
        ))?;
        let resp = self.http.get(url).send().await?;
        parse_envelope(resp).await
    }

    /// `POST /api/v1/payments/hosted/create-session`: create a hosted
    /// checkout session.
    pub async fn create_hosted_session(
        &self,
        request: &HostedPaymentRequest,
    ) -> Result<ResponseEnvelope<HostedSessionData>, ClientError> {
        let url = self.base_url.join("/api/v1/payments/hosted/create-session")?;
        let resp = self.http.post(url).json(request).send().await?;
        parse_envelope(resp).await
    }

    /// `GET /api/v1/payments/hosted/session/{session_id}`: raw upstream
    /// session status.
    pub async fn hosted_session(
        &self,
        session_id: &str,
    ) -> Result<ResponseEnvelope<serde_json::Value>, ClientError> {
        let url = self.base_url.join(&format!(
            "/api/v1/payments/hosted/session/{}",
            urlencoding::encode(session_id)
        ))?;
        let resp = self.http.get(url).send().await?;
        parse_envelope(resp).await
    }

    /// `GET /api/v1/payments/history`: one page of payment history.
    pub async fn payment_history(
        &self,
        query: &PaymentHistoryQuery,
    ) -> Result<ResponseEnvelope<serde_json::Value>, ClientError> {
        let mut url = self.base_url.join("/api/v1/payments/history")?;
        url.set_query(Some(&query.to_query_string()));
        let resp = self.http.get(url).send().await?;
        parse_envelope(resp).await
    }
}
