use std::sync::Arc;

use crate::gateway::PaymentGateway;

/// Runs typed upstream operations (see [`crate::operations`]) over a
/// [`PaymentGateway`].
///
/// Cheap to clone; handlers take a copy per request.
#[derive(Clone)]
pub struct GatewayProcessor {
    pub gateway: Arc<dyn PaymentGateway>,
}

impl GatewayProcessor {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }
}
