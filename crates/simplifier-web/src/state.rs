use std::sync::Arc;

use simplifier_core::ModelGateway;

/// Shared application state accessible from all handlers.
///
/// Built once at startup and read-only afterwards; the gateway handle is the
/// only long-lived resource shared between requests.
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }
}
