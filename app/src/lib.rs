//! # eventos application layer
//!
//! The store that caches the current event, the logged-in user's
//! registration and the UI locale, plus everything between that store and
//! the screen: error-to-UI routing, toasts, form validation, the message
//! catalog, date formatting and host-based event resolution.
//!
//! ## Example
//!
//! ```no_run
//! use eventos_app::config::AppConfig;
//! use eventos_app::plugins;
//! use eventos_app::store::AppAction;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let transport = Arc::new(plugins::transport(&config)?);
//! let store = plugins::session_store(
//!     plugins::session_environment(&config, transport, None),
//!     &config,
//! );
//!
//! store.send(AppAction::FetchEvent { slug: "sbc".to_string() }).await;
//! let name = store.state(|s| s.event_name().map(str::to_owned)).await;
//! println!("{name:?}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dates;
pub mod i18n;
pub mod notifications;
pub mod plugins;
pub mod presenter;
pub mod store;
pub mod url;
pub mod validation;

pub use config::{AppConfig, ConfigError};
pub use i18n::Locale;
pub use presenter::{ErrorSlot, FormHandle, Presentation, UiContext, present_error};
pub use store::{AppAction, AppEnvironment, AppState, AppStore, new_store};
