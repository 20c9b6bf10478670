//! Upstream payment API connection settings.

use std::time::Duration;
use url::Url;

/// Outbound calls fail as network errors after this long.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to.
    pub base_url: Url,
    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
