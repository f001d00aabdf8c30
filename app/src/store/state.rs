//! Application state and its getters

use crate::dates::{format_date_range, format_long_date};
use crate::i18n::Locale;
use crate::notifications::NotificationCenter;
use chrono::{DateTime, Utc};
use eventos_client::types::{Event, EventRegistration, LocalizedName, User};
use serde::{Deserialize, Serialize};

/// State owned by the admin module
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminState {
    /// Registrations for the current event, loaded on demand
    pub registrations: Vec<EventRegistration>,
}

/// Everything the store caches for one session
///
/// `event` is set once per request lifecycle, or by an admin update.
/// `event_registration` is always re-derived from `event` and `user`; the
/// reducer never edits it any other way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The event this site serves
    pub event: Option<Event>,
    /// The logged-in user's registration for `event`
    pub event_registration: Option<EventRegistration>,
    /// Active UI language
    pub locale: Locale,
    /// Logged-in user, mirrored from the authenticator
    pub user: Option<User>,
    /// Toasts on screen
    pub notifications: NotificationCenter,
    /// Admin module
    pub admin: AdminState,
}

impl AppState {
    /// Empty state in `locale`
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Event name in the active locale
    ///
    /// English uses `name_english` when it is not empty.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.event
            .as_ref()
            .map(|event| event.localized_name(self.locale == Locale::En))
    }

    /// Start of the current event
    #[must_use]
    pub fn event_start_date(&self) -> Option<DateTime<Utc>> {
        self.event.as_ref().map(|event| event.starts_on)
    }

    /// End of the current event
    #[must_use]
    pub fn event_end_date(&self) -> Option<DateTime<Utc>> {
        self.event.as_ref().map(|event| event.ends_on)
    }

    /// The user's registration, if any
    #[must_use]
    pub const fn event_user_registration(&self) -> Option<&EventRegistration> {
        self.event_registration.as_ref()
    }

    /// Start date formatted for the active locale
    #[must_use]
    pub fn event_start_label(&self) -> Option<String> {
        self.event_start_date()
            .map(|date| format_long_date(date, self.locale))
    }

    /// `start to end`, formatted for the active locale
    #[must_use]
    pub fn event_dates_label(&self) -> Option<String> {
        self.event
            .as_ref()
            .map(|event| format_date_range(event.starts_on, event.ends_on, self.locale))
    }

    /// Slug of the current event
    #[must_use]
    pub fn event_slug(&self) -> Option<&str> {
        self.event.as_ref().map(|event| event.slug.as_str())
    }
}
