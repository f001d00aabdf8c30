//! Per-request store bootstrap
//!
//! Resolves the event from the host, loads it into a fresh store and, when
//! the caller sent a token, loads the user and their registration. A
//! request for an unknown event never reaches a handler body.

use crate::error::AppError;
use crate::state::WebState;
use eventos_app::i18n::{Locale, keys, t};
use eventos_app::plugins::sync_locale;
use eventos_app::store::{AppAction, AppStore};
use eventos_app::url::resolve_event_slug;
use eventos_client::{ApiError, TransportError};
use std::time::Duration;

/// Longest wait for a result action after its command was sent
///
/// Requests are bounded by the transport timeout; this only guards against
/// an effect that never reports back.
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build and fill the store for one request
///
/// # Errors
///
/// - no slug for the host, or the backend does not know the event: 404
/// - the backend failed or could not be reached: its status (502 without one)
/// - no result action within [`EVENT_TIMEOUT`]: 504
#[tracing::instrument(skip(state, token), fields(logged_in = token.is_some()))]
pub async fn bootstrap(
    state: &WebState,
    host: Option<&str>,
    token: Option<&str>,
    locale: Locale,
) -> Result<AppStore, AppError> {
    let forced = state.config().site.force_event_slug.as_deref();
    let Some(slug) = resolve_event_slug(forced, host) else {
        metrics::counter!("web.bootstrap", "outcome" => "no_slug").increment(1);
        return Err(AppError::not_found(t(locale, keys::EVENT_NOT_FOUND)));
    };

    let store = state.session_store(token).await;
    sync_locale(&store, locale).await;

    let result = store
        .send_and_wait_for(
            AppAction::FetchEvent {
                slug: slug.to_string(),
            },
            |action| {
                matches!(
                    action,
                    AppAction::EventLoaded { .. } | AppAction::EventFetchFailed { .. }
                )
            },
            EVENT_TIMEOUT,
        )
        .await?;

    if let AppAction::EventFetchFailed { error, .. } = result {
        metrics::counter!("web.bootstrap", "outcome" => "fetch_failed").increment(1);
        return Err(event_fetch_error(&error, locale));
    }

    if token.is_some() {
        store.send(AppAction::FetchUser).await;
    }

    metrics::counter!("web.bootstrap", "outcome" => "ok").increment(1);
    Ok(store)
}

/// HTTP error for a failed event fetch
///
/// A normalized error means the backend answered about this event: not
/// found. Anything else is relayed with the upstream status and the most
/// specific message available.
#[must_use]
pub fn event_fetch_error(error: &ApiError, locale: Locale) -> AppError {
    let ApiError::Transport(transport) = error else {
        return AppError::not_found(t(locale, keys::EVENT_NOT_FOUND));
    };

    let message = match transport {
        TransportError::Status { body, .. } => body.to_text(),
        TransportError::RequestFailed(message)
        | TransportError::ResponseParseFailed(message)
        | TransportError::InvalidRequest(message) => Some(message.clone()),
    }
    .filter(|message| !message.trim().is_empty())
    .unwrap_or_else(|| t(locale, keys::NETWORK_ERROR));

    AppError::upstream(transport.status(), message).with_source(transport.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventos_client::{FieldErrors, ResponseBody};
    use http::StatusCode;
    use serde_json::json;

    #[test]
    fn normalized_errors_are_not_found() {
        let generic = event_fetch_error(&ApiError::Generic { message: None }, Locale::Pt);
        assert_eq!(generic.status(), StatusCode::NOT_FOUND);
        assert_eq!(generic.message(), "Evento não encontrado");

        let validation = ApiError::Validation {
            message: "Not found.".to_string(),
            fields: FieldErrors::new(),
        };
        assert_eq!(event_fetch_error(&validation, Locale::En).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_fault_relays_status_and_body() {
        let error = ApiError::Transport(TransportError::Status {
            status: 503,
            path: "api/v1/events/sbc/".to_string(),
            body: ResponseBody::Text("maintenance".to_string()),
        });

        let response = event_fetch_error(&error, Locale::En);

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.message(), "maintenance");
    }

    #[test]
    fn json_body_is_relayed_as_text() {
        let error = ApiError::Transport(TransportError::Status {
            status: 500,
            path: "api/v1/events/sbc/".to_string(),
            body: ResponseBody::Json(json!({"error": "boom"})),
        });

        assert_eq!(event_fetch_error(&error, Locale::En).message(), r#"{"error":"boom"}"#);
    }

    #[test]
    fn empty_failure_falls_back_to_network_message() {
        let bodiless = ApiError::Transport(TransportError::Status {
            status: 502,
            path: "api/v1/events/sbc/".to_string(),
            body: ResponseBody::Empty,
        });
        let unreachable = ApiError::Transport(TransportError::RequestFailed(String::new()));

        for error in [bodiless, unreachable] {
            let response = event_fetch_error(&error, Locale::En);
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
            assert_eq!(
                response.message(),
                "Could not reach the server. Check your connection and try again."
            );
        }
    }

    #[test]
    fn request_failure_keeps_its_message() {
        let error = ApiError::Transport(TransportError::RequestFailed("connection refused".to_string()));
        assert_eq!(event_fetch_error(&error, Locale::En).message(), "connection refused");
    }
}
