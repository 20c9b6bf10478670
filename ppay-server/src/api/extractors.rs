//! Custom Axum extractors.
//!
//! Provides:
//! - `JsonBody<T>`: a JSON body whose rejection is rendered as an
//!   `INVALID_REQUEST_BODY` envelope instead of axum's plain-text error.
//!   A request without a JSON content type or with an empty body reads as
//!   `{}`, so the handler's own required-field checks still apply.
//! - `ClientContext`: the caller facts a payment request is enriched with
//!   (own base URL, client IP, user agent).

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, FromRequest, FromRequestParts, Request},
    http::{HeaderMap, header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{ApiError, INVALID_REQUEST_BODY};
use crate::state::AppState;

/// JSON request body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return empty_object();
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(INVALID_REQUEST_BODY, rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return empty_object();
        }
        Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| JsonBody(value))
            .map_err(|rejection| ApiError::validation(INVALID_REQUEST_BODY, rejection.body_text()))
    }
}

fn empty_object<T: DeserializeOwned>() -> Result<JsonBody<T>, ApiError> {
    serde_json::from_value(Value::Object(Map::new()))
        .map(JsonBody)
        .map_err(|e| ApiError::validation(INVALID_REQUEST_BODY, e.to_string()))
}

/// `application/json` or any `+json` media type.
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = header_str(headers, header::CONTENT_TYPE.as_str()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Facts about the inbound request used to fill in optional payment
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    /// Externally visible base URL of this server, without trailing slash.
    pub base_url: String,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
}

impl FromRequestParts<AppState> for ClientContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let public_url = state.config.server().await.public_url.clone();
        let base_url = match public_url {
            Some(url) => url.as_str().trim_end_matches('/').to_owned(),
            None => base_url_from_headers(&parts.headers),
        };

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(ClientContext {
            base_url,
            client_ip: forwarded_for(&parts.headers).or(peer),
            user_agent: header_str(&parts.headers, header::USER_AGENT.as_str()),
        })
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// First hop of `X-Forwarded-For`.
fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")?
        .split(',')
        .map(str::trim)
        .find(|ip| !ip.is_empty())
        .map(str::to_owned)
}

fn base_url_from_headers(headers: &HeaderMap) -> String {
    let scheme = header_str(headers, "x-forwarded-proto")
        .and_then(|p| p.split(',').next().map(|s| s.trim().to_owned()))
        .unwrap_or_else(|| "http".to_owned());
    let host =
        header_str(headers, header::HOST.as_str()).unwrap_or_else(|| "localhost".to_owned());
    format!("{scheme}://{host}")
}
