//! Reducer for the event, user, registration, locale and notifications
//!
//! API calls never run inside `reduce`: each command returns one
//! [`Effect::Future`] that performs a single request and reports back with a
//! result action.

use super::actions::AppAction;
use super::environment::AppEnvironment;
use super::state::AppState;
use crate::i18n::{keys, t};
use crate::presenter::{Presentation, UiContext, present_error};
use eventos_client::{ApiError, Credentials};
use eventos_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Reducer for everything but the admin module
#[derive(Clone, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn fetch_event(slug: String, env: &AppEnvironment) -> Effect<AppAction> {
        let api = env.api.clone();
        Effect::future(async move {
            match api.events().get_by_slug(&slug).await {
                Ok(event) => Some(AppAction::EventLoaded { event }),
                Err(error) => Some(AppAction::EventFetchFailed { slug, error }),
            }
        })
    }

    /// Re-derive the registration from the current event and user
    ///
    /// Without an event or a user the registration is cleared on the spot.
    /// A failed lookup also clears it: not knowing means not registered.
    fn derive_registration(state: &mut AppState, env: &AppEnvironment) -> Effect<AppAction> {
        let (Some(event), Some(user)) = (&state.event, &state.user) else {
            state.event_registration = None;
            return Effect::None;
        };

        let api = env.api.clone();
        let slug = event.slug.clone();
        let user_id = user.public_id.clone();
        Effect::future(async move {
            let registration = match api
                .event_registrations()
                .list_by_user_and_event(&user_id, &slug)
                .await
            {
                Ok(registrations) => registrations.into_iter().next(),
                Err(error) => {
                    tracing::warn!(%slug, %error, "Could not load event registration");
                    None
                },
            };
            Some(AppAction::EventRegistrationLoaded { registration })
        })
    }

    fn create_registration(
        state: &AppState,
        registration_type: Option<i64>,
        env: &AppEnvironment,
    ) -> Effect<AppAction> {
        let Some(slug) = state.event_slug().map(str::to_owned) else {
            let message = t(state.locale, keys::NO_EVENT_LOADED);
            return Effect::future(async move {
                Some(AppAction::EventRegistrationFailed {
                    error: ApiError::Generic {
                        message: Some(message),
                    },
                })
            });
        };

        let api = env.api.clone();
        Effect::future(async move {
            match api
                .event_registrations()
                .register(&slug, registration_type)
                .await
            {
                Ok(registration) => Some(AppAction::EventRegistrationCreated { registration }),
                Err(error) => Some(AppAction::EventRegistrationFailed { error }),
            }
        })
    }

    fn login(credentials: Credentials, env: &AppEnvironment) -> Effect<AppAction> {
        let auth = Arc::clone(&env.auth);
        Effect::future(async move {
            match auth.login(credentials).await {
                Ok(()) => Some(AppAction::UserLoaded {
                    user: auth.current_user().await,
                }),
                Err(error) => Some(AppAction::AuthFailed { error }),
            }
        })
    }

    fn logout(env: &AppEnvironment) -> Effect<AppAction> {
        let auth = Arc::clone(&env.auth);
        Effect::future(async move {
            match auth.logout().await {
                Ok(()) => Some(AppAction::UserLoaded { user: None }),
                Err(error) => Some(AppAction::AuthFailed { error }),
            }
        })
    }

    fn fetch_user(env: &AppEnvironment) -> Effect<AppAction> {
        let auth = Arc::clone(&env.auth);
        Effect::future(async move {
            match auth.fetch_user().await {
                Ok(user) => Some(AppAction::UserLoaded { user }),
                Err(error) => Some(AppAction::AuthFailed { error }),
            }
        })
    }

    fn show_error(state: &mut AppState, error: &ApiError, env: &AppEnvironment) -> Effect<AppAction> {
        let Presentation::Toast(toast) = present_error(error, UiContext::none(), state.locale) else {
            return Effect::None;
        };

        let toast = toast.with_duration(env.notification_duration);
        let duration = toast.duration;
        state.notifications.expire(env.clock.as_ref());
        let id = state.notifications.show(toast, env.clock.as_ref());
        tracing::debug!(id = id.0, "Showing error notification");

        Effect::Delay {
            duration,
            action: Box::new(AppAction::DismissNotification { id }),
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ================================================================
            // Commands
            // ================================================================
            AppAction::FetchEvent { slug } => {
                tracing::debug!(%slug, "Fetching event");
                smallvec![Self::fetch_event(slug, env)]
            },

            AppAction::FetchUser => smallvec![Self::fetch_user(env)],

            AppAction::LoginUser { credentials } => smallvec![Self::login(credentials, env)],

            AppAction::LogoutUser => smallvec![Self::logout(env)],

            AppAction::FetchEventRegistration => {
                smallvec![Self::derive_registration(state, env)]
            },

            AppAction::CreateEventRegistration { registration_type } => {
                smallvec![Self::create_registration(state, registration_type, env)]
            },

            AppAction::SetLocale { locale } => {
                state.locale = locale;
                smallvec![Effect::None]
            },

            AppAction::ShowError { error } => smallvec![Self::show_error(state, &error, env)],

            AppAction::DismissNotification { id } => {
                state.notifications.dismiss(id);
                smallvec![Effect::None]
            },

            // ================================================================
            // Results
            // ================================================================
            AppAction::EventLoaded { event } => {
                tracing::info!(slug = %event.slug, "Event loaded");
                state.event = Some(event);
                smallvec![Self::derive_registration(state, env)]
            },

            AppAction::EventFetchFailed { slug, error } => {
                tracing::warn!(%slug, %error, "Event fetch failed");
                smallvec![Effect::None]
            },

            AppAction::UserLoaded { user } => {
                state.user = user;
                smallvec![Self::derive_registration(state, env)]
            },

            AppAction::AuthFailed { error } => {
                tracing::warn!(%error, "Authentication failed");
                smallvec![Effect::None]
            },

            AppAction::EventRegistrationLoaded { registration } => {
                state.event_registration = registration;
                smallvec![Effect::None]
            },

            AppAction::EventRegistrationCreated { registration } => {
                tracing::info!(id = registration.id, "Registered for event");
                state.event_registration = Some(registration);
                smallvec![Effect::None]
            },

            AppAction::EventRegistrationFailed { error } => {
                tracing::warn!(%error, "Event registration failed");
                smallvec![Effect::None]
            },

            AppAction::Admin(_) => smallvec![Effect::None],
        }
    }
}
