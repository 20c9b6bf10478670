//! Application state shared across all request handlers.

use ppay_core::framework::GatewayProcessor;
use ppay_core::gateway::PaymentGateway;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::runtime::SharedConfig;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration (can be reloaded via SIGHUP).
    pub config: SharedConfig,
    /// Upstream gateway handle, swapped as a whole on reload.
    gateway: Arc<RwLock<GatewayProcessor>>,
}

impl AppState {
    pub fn new(config: SharedConfig, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            config,
            gateway: Arc::new(RwLock::new(GatewayProcessor::new(gateway))),
        }
    }

    /// Snapshot of the current gateway. The lock is released before the
    /// caller issues any upstream call.
    pub async fn processor(&self) -> GatewayProcessor {
        self.gateway.read().await.clone()
    }

    /// Replace the upstream gateway (used during SIGHUP reload).
    pub async fn replace_gateway(&self, gateway: Arc<dyn PaymentGateway>) {
        *self.gateway.write().await = GatewayProcessor::new(gateway);
    }
}
