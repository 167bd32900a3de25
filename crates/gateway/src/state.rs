//! Application state for dependency injection.

use std::sync::Arc;

use todo_service_lib::Application;

use crate::config::GatewayConfig;
use crate::token::SessionTokens;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
    pub tokens: SessionTokens,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(app: Arc<Application>, config: GatewayConfig) -> Self {
        Self {
            app,
            tokens: SessionTokens::new(&config.jwt),
            config: Arc::new(config),
        }
    }
}
