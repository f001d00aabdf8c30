//! Store actions
//!
//! Commands come from the UI or the request bootstrap. Result actions are
//! produced by effects once an API call or an authenticator call settles.

use crate::i18n::Locale;
use crate::notifications::NotificationId;
use eventos_client::auth::Credentials;
use eventos_client::types::{Event, EventRegistration, Schedule, User};
use eventos_client::ApiError;

/// Every input of the application reducer
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    // ========================================================================
    // Commands
    // ========================================================================
    /// Load the event served by this site
    FetchEvent {
        /// Event slug
        slug: String,
    },

    /// Reload the logged-in user from the authenticator
    FetchUser,

    /// Log in, then re-derive the registration
    LoginUser {
        /// Email and password
        credentials: Credentials,
    },

    /// Log out, then clear the registration
    LogoutUser,

    /// Re-derive the registration from the current event and user
    FetchEventRegistration,

    /// Register the logged-in user for the current event
    CreateEventRegistration {
        /// Chosen tier, omitted when the event has none
        registration_type: Option<i64>,
    },

    /// Switch the UI language
    SetLocale {
        /// New locale
        locale: Locale,
    },

    /// Show an error nobody else displayed as a toast
    ShowError {
        /// The error
        error: ApiError,
    },

    /// Hide a toast
    DismissNotification {
        /// Toast to hide
        id: NotificationId,
    },

    /// Admin module
    Admin(AdminAction),

    // ========================================================================
    // Results
    // ========================================================================
    /// The event was loaded
    EventLoaded {
        /// The event
        event: Event,
    },

    /// Loading the event failed
    EventFetchFailed {
        /// Requested slug
        slug: String,
        /// Why
        error: ApiError,
    },

    /// The authenticator reported the current user
    UserLoaded {
        /// Logged-in user, `None` when logged out
        user: Option<User>,
    },

    /// Login, logout or user reload failed
    AuthFailed {
        /// Why
        error: ApiError,
    },

    /// The registration for (event, user) was derived
    EventRegistrationLoaded {
        /// First registration the backend returned
        registration: Option<EventRegistration>,
    },

    /// Registration succeeded
    EventRegistrationCreated {
        /// The new registration
        registration: EventRegistration,
    },

    /// Registration failed
    EventRegistrationFailed {
        /// Why
        error: ApiError,
    },
}

/// Admin module actions
#[derive(Clone, Debug, PartialEq)]
pub enum AdminAction {
    /// Save the current event, then reload it
    UpdateEvent {
        /// New names and dates
        schedule: Schedule,
    },

    /// The event was saved
    EventUpdated {
        /// Slug the event was saved under
        slug: String,
    },

    /// Saving the event failed
    UpdateEventFailed {
        /// Why
        error: ApiError,
    },

    /// Load every registration for the current event
    FetchRegistrations,

    /// Registrations were loaded
    RegistrationsLoaded {
        /// The registrations
        registrations: Vec<EventRegistration>,
    },

    /// Loading registrations failed
    RegistrationsFetchFailed {
        /// Why
        error: ApiError,
    },
}

impl AppAction {
    /// The error carried by a failure action
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::EventFetchFailed { error, .. }
            | Self::AuthFailed { error }
            | Self::EventRegistrationFailed { error }
            | Self::Admin(
                AdminAction::UpdateEventFailed { error }
                | AdminAction::RegistrationsFetchFailed { error },
            ) => Some(error),
            _ => None,
        }
    }

    /// True for actions an effect produces when a command settles
    #[must_use]
    pub const fn is_result(&self) -> bool {
        matches!(
            self,
            Self::EventLoaded { .. }
                | Self::EventFetchFailed { .. }
                | Self::UserLoaded { .. }
                | Self::AuthFailed { .. }
                | Self::EventRegistrationLoaded { .. }
                | Self::EventRegistrationCreated { .. }
                | Self::EventRegistrationFailed { .. }
                | Self::Admin(
                    AdminAction::EventUpdated { .. }
                        | AdminAction::UpdateEventFailed { .. }
                        | AdminAction::RegistrationsLoaded { .. }
                        | AdminAction::RegistrationsFetchFailed { .. }
                )
        )
    }
}
