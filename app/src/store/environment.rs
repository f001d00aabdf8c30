//! Collaborators injected into the application reducer

use crate::notifications::DEFAULT_DURATION;
use eventos_client::{ApiClient, Authenticator};
use eventos_core::environment::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Environment dependencies for the application reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Backend API
    pub api: ApiClient,
    /// Owns the login session
    pub auth: Arc<dyn Authenticator>,
    /// Clock for notification timestamps
    pub clock: Arc<dyn Clock>,
    /// How long error toasts stay on screen
    pub notification_duration: Duration,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment` with the default toast duration
    #[must_use]
    pub fn new(api: ApiClient, auth: Arc<dyn Authenticator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            auth,
            clock,
            notification_duration: DEFAULT_DURATION,
        }
    }

    /// Override the toast duration
    #[must_use]
    pub const fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment")
            .field("api", &self.api)
            .field("notification_duration", &self.notification_duration)
            .finish_non_exhaustive()
    }
}
