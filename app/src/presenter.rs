//! Error-to-UI routing
//!
//! Decides where a normalized error is shown: on the form fields, in the
//! component's error slot, or as a transient toast. Exactly one surface
//! receives the message.

use crate::i18n::{Locale, keys, t};
use crate::notifications::Toast;
use eventos_client::{ApiError, FieldErrors};

/// A form that can display server-side field errors
pub trait FormHandle {
    /// Replace the displayed errors of the listed fields
    fn set_errors(&mut self, fields: &FieldErrors);
}

/// A component's inline error message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorSlot(Option<String>);

impl ErrorSlot {
    /// Show `message`
    pub fn set(&mut self, message: impl Into<String>) {
        self.0 = Some(message.into());
    }

    /// Hide the message
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Message shown, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Surfaces available where the error happened
#[derive(Default)]
pub struct UiContext<'a> {
    /// Form on the page, if any
    pub form: Option<&'a mut dyn FormHandle>,
    /// Component error slot, if any
    pub error_slot: Option<&'a mut ErrorSlot>,
}

impl<'a> UiContext<'a> {
    /// Neither form nor slot
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Attach a form
    #[must_use]
    pub fn with_form(mut self, form: &'a mut dyn FormHandle) -> Self {
        self.form = Some(form);
        self
    }

    /// Attach an error slot
    #[must_use]
    pub fn with_slot(mut self, slot: &'a mut ErrorSlot) -> Self {
        self.error_slot = Some(slot);
        self
    }
}

/// Where the error ended up
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Field errors pushed into the form
    Form {
        /// Message also written to the slot, when one was present
        message: String,
    },
    /// Message written to the error slot
    Slot {
        /// The message
        message: String,
    },
    /// Nothing else could take it: show a toast
    Toast(Toast),
}

impl Presentation {
    /// The message shown, whatever the surface
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Form { message } | Self::Slot { message } => message,
            Self::Toast(toast) => &toast.message,
        }
    }
}

/// Localized message for an error
#[must_use]
pub fn select_message(error: &ApiError, locale: Locale) -> String {
    match error {
        ApiError::Validation { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Validation { .. } => t(locale, keys::FORM_VALIDATION_ERROR),
        ApiError::Generic { .. } => t(locale, keys::API_ERROR),
        ApiError::Transport(transport) if transport.is_server_fault() => t(locale, keys::API_ERROR),
        ApiError::Transport(_) => t(locale, keys::NETWORK_ERROR),
    }
}

/// Messages of the only field in error, joined by newlines
#[must_use]
pub fn single_field_message(error: &ApiError) -> Option<String> {
    let fields = error.fields()?;
    if fields.len() != 1 {
        return None;
    }
    fields.values().next().map(|messages| messages.join("\n"))
}

/// Route `error` to exactly one UI surface
pub fn present_error(error: &ApiError, ui: UiContext<'_>, locale: Locale) -> Presentation {
    let message = select_message(error, locale);
    let UiContext { form, error_slot } = ui;

    if let (Some(form), Some(fields)) = (form, error.fields()) {
        form.set_errors(fields);
        if let Some(slot) = error_slot {
            slot.set(message.clone());
        }
        tracing::debug!(fields = fields.len(), "Showing errors on form fields");
        return Presentation::Form { message };
    }

    let message = single_field_message(error).unwrap_or(message);

    if let Some(slot) = error_slot {
        slot.set(message.clone());
        return Presentation::Slot { message };
    }

    tracing::debug!(%message, "Showing error toast");
    Presentation::Toast(Toast::error(message))
}
