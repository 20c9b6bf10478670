//! TOML file configuration structures.
//!
//! These structs directly map to the `ppay-config.toml` file format.
//! Every section is optional so the upstream settings can come entirely
//! from the command line or environment.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:5010").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
    /// Externally visible base URL, e.g. when running behind a proxy.
    #[serde(default)]
    pub public_url: Option<Url>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
            public_url: None,
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5010))
}

/// Upstream payment API section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, including any path prefix.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Partner API key sent as a bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    ppay_core::config::DEFAULT_UPSTREAM_TIMEOUT.as_secs()
}
