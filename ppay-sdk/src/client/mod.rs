//! HTTP clients for the partner payment API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod demo;
mod payments;

pub use demo::DemoClient;
pub use payments::PaymentsClient;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::objects::ResponseEnvelope;

/// Errors produced by the SDK HTTP clients.
///
/// API-level failures (validation, upstream errors) are not errors here:
/// they arrive as a [`ResponseEnvelope`] with `success == false`.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, or a reset connection).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something that is not an envelope.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Decode an envelope from any response status.
///
/// Both successful and failed calls answer with an envelope, so the status
/// code only matters when the body cannot be decoded.
async fn parse_envelope<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<ResponseEnvelope<T>, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|_| ClientError::Api {
        status,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
