//! State shared by every handler
//!
//! Holds configuration and one HTTP connection pool. Stores are never
//! shared: each request gets its own, with its own token.

use eventos_app::config::AppConfig;
use eventos_app::plugins;
use eventos_app::store::AppStore;
use eventos_client::{
    Authenticator, ReqwestTransport, TokenAuthenticator, Transport, TransportError,
};
use std::sync::Arc;

/// Handler state
#[derive(Clone, Debug)]
pub struct WebState {
    config: Arc<AppConfig>,
    transport: Arc<ReqwestTransport>,
}

impl WebState {
    /// Connect to the configured backend
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidRequest`] for a bad base URL.
    pub fn new(config: AppConfig) -> Result<Self, TransportError> {
        let transport = plugins::transport(&config)?;
        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    /// Configuration
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// A fresh store for one request, logged in when `token` is given
    pub async fn session_store(&self, token: Option<&str>) -> AppStore {
        let transport: Arc<dyn Transport> = Arc::new(self.transport.new_session());
        let api = plugins::api_client(Arc::clone(&transport));
        let auth: Arc<dyn Authenticator> = match token {
            Some(token) => Arc::new(TokenAuthenticator::with_token(api, token).await),
            None => Arc::new(TokenAuthenticator::new(api)),
        };

        let environment = plugins::session_environment(&self.config, transport, Some(auth));
        plugins::session_store(environment, &self.config)
    }
}
