//! Runtime configuration types.
//!
//! These types hold the validated configuration used by the server. The
//! actual config loading/parsing is handled by the server crate.

mod server;
mod upstream;

pub use server::ServerConfig;
pub use upstream::{DEFAULT_UPSTREAM_TIMEOUT, UpstreamConfig};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared configuration state with separate locks for each section.
///
/// This allows independent access to different configuration sections
/// without blocking other readers/writers.
#[derive(Clone)]
pub struct SharedConfig {
    /// Server configuration (listen address, public URL).
    pub server: Arc<RwLock<ServerConfig>>,
    /// Upstream payment API connection settings.
    pub upstream: Arc<RwLock<UpstreamConfig>>,
}

impl SharedConfig {
    pub fn new(server: ServerConfig, upstream: UpstreamConfig) -> Self {
        Self {
            server: Arc::new(RwLock::new(server)),
            upstream: Arc::new(RwLock::new(upstream)),
        }
    }

    /// Get a read lock on the server configuration.
    pub async fn server(&self) -> tokio::sync::RwLockReadGuard<'_, ServerConfig> {
        self.server.read().await
    }

    /// Get a read lock on the upstream configuration.
    pub async fn upstream(&self) -> tokio::sync::RwLockReadGuard<'_, UpstreamConfig> {
        self.upstream.read().await
    }

    /// Replace both sections (used during SIGHUP reload).
    pub async fn update_all(&self, server: ServerConfig, upstream: UpstreamConfig) {
        // Update in sequence to avoid potential deadlocks
        *self.server.write().await = server;
        *self.upstream.write().await = upstream;
    }
}
