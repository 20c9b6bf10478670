//! Upstream payment gateway access.
//!
//! Everything that talks to the upstream API goes through the
//! [`PaymentGateway`] trait so handlers can be exercised against an
//! in-memory stub. [`HttpGateway`] is the reqwest-backed implementation.

mod http;

pub use http::{BuildGatewayError, HttpGateway};

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a [`PaymentGateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    Api {
        status: u16,
        /// Upstream body, or the raw text as a JSON string when it was not JSON.
        body: serde_json::Value,
    },

    /// The upstream could not be reached (connection refused, DNS failure).
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Any other transport failure, including timeouts.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx body did not have the expected shape.
    #[error("invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            GatewayError::Unreachable(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// Minimal HTTP capability the upstream API is reached through.
///
/// `path` is relative to the configured upstream base URL and may carry a
/// query string. Both methods return the decoded JSON body of a 2xx
/// response.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError>;

    async fn get(&self, path: &str) -> Result<serde_json::Value, GatewayError>;
}
