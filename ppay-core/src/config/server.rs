//! Server configuration.

use std::net::SocketAddr;
use url::Url;

/// Server configuration with runtime values.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port to listen on.
    pub listen: SocketAddr,
    /// Externally visible base URL used to build return and redirect URLs.
    /// When absent, it is derived from the `Host` header of each request.
    pub public_url: Option<Url>,
}
