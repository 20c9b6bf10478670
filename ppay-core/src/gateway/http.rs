//! reqwest-backed [`PaymentGateway`].

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::{GatewayError, PaymentGateway};
use crate::config::UpstreamConfig;

/// Errors raised while building an [`HttpGateway`].
#[derive(Debug, thiserror::Error)]
pub enum BuildGatewayError {
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP client for the upstream payment API.
///
/// Every request carries `Authorization: Bearer <api_key>` and is bounded
/// by the configured timeout. No retries are attempted.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &UpstreamConfig) -> Result<Self, BuildGatewayError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| BuildGatewayError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Append `path` to the base URL. A plain `Url::join` would drop any
    /// path prefix of the base (e.g. `/api/v1`).
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, GatewayError> {
        let resp = request.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            });
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST upstream");
        self.send(self.client.post(url).json(body)).await
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value, GatewayError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET upstream");
        self.send(self.client.get(url)).await
    }
}
