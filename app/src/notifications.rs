//! Transient notifications (toasts)

use chrono::{DateTime, Utc};
use eventos_core::environment::Clock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default display time
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Identifies a notification for dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// Screen corner a toast is shown in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Bottom right
    #[default]
    BottomRight,
    /// Top right
    TopRight,
}

/// Visual style of a toast
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Error
    #[default]
    Danger,
    /// Success
    Success,
}

/// A toast to show
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Text
    pub message: String,
    /// Display time
    pub duration: Duration,
    /// Screen corner
    pub position: Position,
    /// Visual style
    pub style: Style,
}

impl Toast {
    /// Error toast: 5 seconds, bottom right, danger
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_DURATION,
            position: Position::BottomRight,
            style: Style::Danger,
        }
    }

    /// Override the display time
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A toast currently on screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier
    pub id: NotificationId,
    /// Content and presentation
    pub toast: Toast,
    /// When it was shown
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    /// When the toast goes away
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.toast.duration)
            .ok()
            .and_then(|duration| self.shown_at.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Visible toasts, in the order they were shown
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCenter {
    visible: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    /// Show `toast`, returning its id
    pub fn show(&mut self, toast: Toast, clock: &dyn Clock) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.visible.push(Notification {
            id,
            toast,
            shown_at: clock.now(),
        });
        id
    }

    /// Remove a toast; `false` if it was already gone
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|notification| notification.id != id);
        self.visible.len() != before
    }

    /// Drop every toast whose display time has passed
    pub fn expire(&mut self, clock: &dyn Clock) {
        let now = clock.now();
        self.visible.retain(|notification| notification.expires_at() > now);
    }

    /// Toasts on screen
    #[must_use]
    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    /// True when nothing is shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
