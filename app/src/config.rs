//! Configuration management for the eventos client.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present) with sensible defaults.

use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but does not parse
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration
    pub api: ApiConfig,
    /// Event and locale selection
    pub site: SiteConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// UI notification configuration
    pub notifications: NotificationConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every `api/v1/...` path is joined to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Event and locale selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Serve this event regardless of the request host (development)
    pub force_event_slug: Option<String>,
    /// Locale used when a request carries none
    pub default_locale: Locale,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Notification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays visible, in seconds
    pub display_secs: u64,
}

impl ApiConfig {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl NotificationConfig {
    /// Display time as a [`Duration`]
    #[must_use]
    pub const fn display_duration(&self) -> Duration {
        Duration::from_secs(self.display_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/".to_string(),
                request_timeout_secs: 30,
            },
            site: SiteConfig {
                force_event_slug: None,
                default_locale: Locale::En,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            notifications: NotificationConfig { display_secs: 5 },
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            api: ApiConfig {
                base_url: var("EVENTOS_API_BASE_URL").unwrap_or(defaults.api.base_url),
                request_timeout_secs: parse(
                    "EVENTOS_REQUEST_TIMEOUT_SECS",
                    var("EVENTOS_REQUEST_TIMEOUT_SECS"),
                    defaults.api.request_timeout_secs,
                )?,
            },
            site: SiteConfig {
                force_event_slug: var("EVENTOS_FORCE_EVENT_SLUG"),
                default_locale: parse(
                    "EVENTOS_DEFAULT_LOCALE",
                    var("EVENTOS_DEFAULT_LOCALE"),
                    defaults.site.default_locale,
                )?,
            },
            server: ServerConfig {
                host: var("EVENTOS_HOST").unwrap_or(defaults.server.host),
                port: parse("EVENTOS_PORT", var("EVENTOS_PORT"), defaults.server.port)?,
            },
            notifications: NotificationConfig {
                display_secs: parse(
                    "EVENTOS_NOTIFICATION_SECS",
                    var("EVENTOS_NOTIFICATION_SECS"),
                    defaults.notifications.display_secs,
                )?,
            },
        })
    }

    /// `host:port` to bind the server to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return Ok(default);
    };
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.notifications.display_duration(), Duration::from_secs(5));
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("EVENTOS_API_BASE_URL", "https://api.eventos.dev/"),
            ("EVENTOS_FORCE_EVENT_SLUG", "sbc"),
            ("EVENTOS_DEFAULT_LOCALE", "pt"),
            ("EVENTOS_PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.eventos.dev/");
        assert_eq!(config.site.force_event_slug.as_deref(), Some("sbc"));
        assert_eq!(config.site.default_locale, Locale::Pt);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[("EVENTOS_FORCE_EVENT_SLUG", "  ")]).unwrap();
        assert_eq!(config.site.force_event_slug, None);
    }

    #[test]
    fn invalid_values_are_errors() {
        let error = load(&[("EVENTOS_PORT", "http")]).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { key: "EVENTOS_PORT", .. }));

        let error = load(&[("EVENTOS_DEFAULT_LOCALE", "fr")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid value \"fr\" for EVENTOS_DEFAULT_LOCALE: Unsupported locale: fr"
        );
    }
}
