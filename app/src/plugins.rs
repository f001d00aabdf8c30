//! Bootstrap wiring
//!
//! Builds the collaborators a store needs and the glue between the store
//! and the UI: the API client with its error hook, locale-prefixed
//! redirects after login/logout, locale synchronization, the global error
//! handler and the form validators.

use crate::config::AppConfig;
use crate::i18n::{Locale, locale_path};
use crate::presenter::{Presentation, UiContext, present_error};
use crate::store::{AppAction, AppEnvironment, AppStore, new_store};
use crate::validation::{FormState, Rule};
use eventos_client::{
    ApiClient, ApiError, Authenticator, ReqwestTransport, TokenAuthenticator, Transport,
    TransportError, classify_api_error,
};
use eventos_core::environment::{Clock, SystemClock};
use std::sync::Arc;

/// API client over `transport` with API-path errors normalized
#[must_use]
pub fn api_client(transport: Arc<dyn Transport>) -> ApiClient {
    ApiClient::new(transport).with_error_hook(classify_api_error)
}

/// Shared HTTP transport for the configured backend
///
/// # Errors
///
/// Returns [`TransportError::InvalidRequest`] for a bad base URL.
pub fn transport(config: &AppConfig) -> Result<ReqwestTransport, TransportError> {
    ReqwestTransport::new(&config.api.base_url, config.api.request_timeout())
}

/// Environment for one session
///
/// The authenticator installs its token on `transport`, so the transport
/// must belong to this session alone.
#[must_use]
pub fn session_environment(
    config: &AppConfig,
    transport: Arc<dyn Transport>,
    auth: Option<Arc<dyn Authenticator>>,
) -> AppEnvironment {
    let api = api_client(transport);
    let auth = auth.unwrap_or_else(|| Arc::new(TokenAuthenticator::new(api.clone())));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    AppEnvironment::new(api, auth, clock)
        .with_notification_duration(config.notifications.display_duration())
}

/// Store for one session in the configured default locale
#[must_use]
pub fn session_store(environment: AppEnvironment, config: &AppConfig) -> AppStore {
    new_store(environment, config.site.default_locale)
}

/// Where to go after login or logout, prefixed with the active locale
#[must_use]
pub fn redirect_with_locale(locale: Locale, path: &str) -> String {
    locale_path(locale, path)
}

/// Keep the store locale in line with the UI language
///
/// Does nothing when they already agree.
pub async fn sync_locale(store: &AppStore, locale: Locale) {
    if store.state(|state| state.locale).await != locale {
        tracing::debug!(%locale, "Syncing store locale");
        store.send(AppAction::SetLocale { locale }).await;
    }
}

/// Global error handler
///
/// Routes `error` to the form or the error slot when the caller has one;
/// otherwise the store shows it as a toast.
pub async fn handle_error(
    store: &AppStore,
    error: &ApiError,
    ui: UiContext<'_>,
    locale: Locale,
) -> Presentation {
    let presentation = present_error(error, ui, locale);
    if matches!(presentation, Presentation::Toast(_)) {
        store
            .send(AppAction::ShowError {
                error: error.clone(),
            })
            .await;
    }
    presentation
}

/// Login form: `email` (required, email) and `password` (required)
#[must_use]
pub fn login_form(locale: Locale) -> FormState {
    FormState::new(locale)
        .field("email", &[Rule::Required, Rule::Email])
        .field("password", &[Rule::Required])
}

/// Sign-up form fields and rules
#[must_use]
pub fn signup_form(locale: Locale) -> FormState {
    FormState::new(locale)
        .field("first_name", &[Rule::Required])
        .field("last_name", &[Rule::Required])
        .field("email", &[Rule::Required, Rule::Email])
        .field("password", &[Rule::Required])
}
