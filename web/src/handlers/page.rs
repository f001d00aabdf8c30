//! Event page context
//!
//! `GET /:lang` bootstraps a store for the request and renders what an
//! event page needs: the event in the requested language, the caller and
//! their registration.

use super::route_locale;
use crate::bootstrap::bootstrap;
use crate::error::AppError;
use crate::extractors::{BearerToken, EventHost};
use crate::state::WebState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use eventos_app::i18n::{Locale, locale_path};
use eventos_app::store::AppState;
use eventos_client::{EventRegistration, LocalizedName, RegistrationType, User};
use serde::Serialize;

/// Everything an event page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Active locale
    pub locale: Locale,
    /// Event shown, always present once bootstrap succeeded
    pub event: Option<EventView>,
    /// Logged-in user
    pub user: Option<UserView>,
    /// The user's registration for the event
    pub registration: Option<RegistrationView>,
}

/// Event as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    /// URL-safe identifier
    pub slug: String,
    /// Name in the active locale
    pub name: String,
    /// `start to end`, formatted for the locale
    pub dates: String,
    /// Start date, formatted for the locale
    pub starts: String,
    /// Whether the activities page is shown
    pub has_activities: bool,
    /// Whether submissions are open
    pub has_tracks: bool,
    /// Types a visitor can register as
    pub registration_types: Vec<RegistrationTypeView>,
}

/// Registration type with its localized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationTypeView {
    /// Backend id, sent back when registering
    pub id: i64,
    /// Name in the active locale
    pub name: String,
}

impl RegistrationTypeView {
    fn new(registration_type: &RegistrationType, locale: Locale) -> Self {
        Self {
            id: registration_type.id,
            name: registration_type
                .localized_name(locale == Locale::En)
                .to_string(),
        }
    }
}

/// The caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    /// Public identifier
    pub public_id: String,
    /// First and last name
    pub full_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            public_id: user.public_id.clone(),
            full_name: user.full_name(),
        }
    }
}

/// A registration, with the type name localized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationView {
    /// Backend id
    pub id: i64,
    /// Type name in the active locale
    pub registration_type: Option<String>,
}

impl RegistrationView {
    /// View of `registration` in `locale`
    #[must_use]
    pub fn new(registration: &EventRegistration, locale: Locale) -> Self {
        Self {
            id: registration.id,
            registration_type: registration
                .registration_type
                .as_ref()
                .map(|kind| kind.localized_name(locale == Locale::En).to_string()),
        }
    }
}

impl PageContext {
    /// Snapshot of the store state
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let locale = state.locale;
        let event = state.event.as_ref().map(|event| EventView {
            slug: event.slug.clone(),
            name: state.event_name().unwrap_or_default().to_string(),
            dates: state.event_dates_label().unwrap_or_default(),
            starts: state.event_start_label().unwrap_or_default(),
            has_activities: event.has_activities,
            has_tracks: event.has_tracks,
            registration_types: event
                .registration_types
                .iter()
                .map(|kind| RegistrationTypeView::new(kind, locale))
                .collect(),
        });

        Self {
            locale,
            event,
            user: state.user.as_ref().map(UserView::from),
            registration: state
                .event_user_registration()
                .map(|registration| RegistrationView::new(registration, locale)),
        }
    }
}

/// `GET /`: send the visitor to the default locale
#[allow(clippy::unused_async)]
pub async fn root_redirect(State(state): State<WebState>) -> Redirect {
    Redirect::temporary(&locale_path(state.config().site.default_locale, "/"))
}

/// `GET /:lang`
///
/// # Errors
///
/// See [`bootstrap`].
#[tracing::instrument(skip_all, fields(lang = %lang))]
pub async fn page(
    State(state): State<WebState>,
    Path(lang): Path<String>,
    EventHost(host): EventHost,
    BearerToken(token): BearerToken,
) -> Result<Response, AppError> {
    let locale = match route_locale(&lang) {
        Ok(locale) => locale,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let store = bootstrap(&state, host.as_deref(), token.as_deref(), locale).await?;
    let context = store.state(PageContext::from_state).await;

    Ok(Json(context).into_response())
}
