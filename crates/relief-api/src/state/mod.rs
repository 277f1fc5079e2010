//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, token verifier, and configuration.

use std::sync::Arc;

use relief_common::{AppConfig, TokenVerifier};
use relief_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Verifier for bearer tokens issued by the identity provider
    token_verifier: Arc<TokenVerifier>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        token_verifier: TokenVerifier,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            token_verifier: Arc::new(token_verifier),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the token verifier
    pub fn token_verifier(&self) -> &TokenVerifier {
        &self.token_verifier
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
