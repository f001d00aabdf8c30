//! Event registration
//!
//! `POST /:lang/registration` registers the caller for the host's event.
//! Backend rejections come back as 422 with the per-field messages so a
//! form can place them.

use super::page::RegistrationView;
use super::route_locale;
use crate::bootstrap::{EVENT_TIMEOUT, bootstrap};
use crate::error::AppError;
use crate::extractors::{BearerToken, EventHost};
use crate::state::WebState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventos_app::i18n::{Locale, keys, t};
use eventos_app::presenter::select_message;
use eventos_app::store::AppAction;
use eventos_client::ApiError;
use serde::Deserialize;

/// Request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    /// Registration type id, when the event offers several
    #[serde(default)]
    pub registration_type: Option<i64>,
}

/// `POST /:lang/registration`
///
/// # Errors
///
/// - 401 without a token, or when the token does not resolve to a user
/// - 422 when the backend rejects the registration
/// - anything [`bootstrap`] returns
#[tracing::instrument(skip_all, fields(lang = %lang, registration_type = ?request.registration_type))]
pub async fn create_registration(
    State(state): State<WebState>,
    Path(lang): Path<String>,
    EventHost(host): EventHost,
    BearerToken(token): BearerToken,
    Json(request): Json<RegistrationRequest>,
) -> Result<Response, AppError> {
    let locale = match route_locale(&lang) {
        Ok(locale) => locale,
        Err(redirect) => return Ok(redirect.into_response()),
    };
    let Some(token) = token else {
        return Err(AppError::unauthorized(t(locale, keys::LOGIN_REQUIRED)));
    };

    let store = bootstrap(&state, host.as_deref(), Some(&token), locale).await?;
    if store.state(|state| state.user.is_none()).await {
        return Err(AppError::unauthorized(t(locale, keys::LOGIN_REQUIRED)));
    }

    let result = store
        .send_and_wait_for(
            AppAction::CreateEventRegistration {
                registration_type: request.registration_type,
            },
            |action| {
                matches!(
                    action,
                    AppAction::EventRegistrationCreated { .. }
                        | AppAction::EventRegistrationFailed { .. }
                )
            },
            EVENT_TIMEOUT,
        )
        .await?;

    match result {
        AppAction::EventRegistrationCreated { registration } => {
            metrics::counter!("web.registrations.created").increment(1);
            let view = RegistrationView::new(&registration, locale);
            Ok((StatusCode::CREATED, Json(view)).into_response())
        },
        AppAction::EventRegistrationFailed { error } => Err(registration_error(&error, locale)),
        other => Err(AppError::internal(format!("Unexpected action: {other:?}"))),
    }
}

/// HTTP error for a rejected registration
#[must_use]
pub fn registration_error(error: &ApiError, locale: Locale) -> AppError {
    match error {
        ApiError::Validation { fields, .. } => {
            AppError::validation(select_message(error, locale)).with_fields(fields.clone())
        },
        ApiError::Generic { message } => AppError::bad_request(
            message
                .clone()
                .unwrap_or_else(|| t(locale, keys::API_ERROR)),
        ),
        ApiError::Transport(transport) => {
            AppError::upstream(transport.status(), select_message(error, locale))
                .with_source(transport.clone())
        },
    }
}
