//! Locales and the message catalog
//!
//! Only the messages the error and validation paths need live here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported UI languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Brazilian Portuguese
    Pt,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 2] = [Self::En, Self::Pt];

    /// Route prefix code (`en`, `pt`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// chrono locale used for date formatting
    #[must_use]
    pub const fn chrono_locale(self) -> chrono::Locale {
        match self {
            Self::En => chrono::Locale::en_US,
            Self::Pt => chrono::Locale::pt_BR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unsupported locale code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| UnknownLocale(code.to_string()))
    }
}

/// Catalog keys
pub mod keys {
    /// The request never got a usable answer
    pub const NETWORK_ERROR: &str = "genericErrors.network";
    /// The backend failed without detail
    pub const API_ERROR: &str = "genericErrors.api";
    /// The backend rejected form input
    pub const FORM_VALIDATION_ERROR: &str = "genericErrors.formValidation";
    /// No event for this host
    pub const EVENT_NOT_FOUND: &str = "genericErrors.eventNotFound";
    /// An event action ran before the event was loaded
    pub const NO_EVENT_LOADED: &str = "genericErrors.noEventLoaded";
    /// The action needs a logged-in user
    pub const LOGIN_REQUIRED: &str = "genericErrors.loginRequired";
    /// Prefix of validation rule messages
    pub const VALIDATION_PREFIX: &str = "forms.validation.";
}

/// Look up `key`, falling back to the key itself when missing
#[must_use]
pub fn t(locale: Locale, key: &str) -> String {
    lookup(locale, key).map_or_else(
        || {
            tracing::debug!(%locale, key, "Missing translation");
            key.to_string()
        },
        str::to_string,
    )
}

/// Look up `key` and substitute `{name}` placeholders
#[must_use]
pub fn t_with(locale: Locale, key: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(t(locale, key), |message, (name, value)| {
            message.replace(&format!("{{{name}}}"), value)
        })
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let message = match (locale, key) {
        (Locale::En, "genericErrors.network") => "Could not reach the server. Check your connection and try again.",
        (Locale::Pt, "genericErrors.network") => "Não foi possível contactar o servidor. Verifique sua conexão e tente novamente.",
        (Locale::En, "genericErrors.api") => "API error",
        (Locale::Pt, "genericErrors.api") => "Erro na API",
        (Locale::En, "genericErrors.formValidation") => "Please correct the highlighted fields.",
        (Locale::Pt, "genericErrors.formValidation") => "Corrija os campos destacados.",
        (Locale::En, "genericErrors.eventNotFound") => "Event not found",
        (Locale::Pt, "genericErrors.eventNotFound") => "Evento não encontrado",
        (Locale::En, "genericErrors.noEventLoaded") => "No event loaded",
        (Locale::Pt, "genericErrors.noEventLoaded") => "Nenhum evento carregado",
        (Locale::En, "genericErrors.loginRequired") => "You need to log in first",
        (Locale::Pt, "genericErrors.loginRequired") => "Você precisa entrar primeiro",
        (Locale::En, "forms.validation.required") => "The {field} field is required",
        (Locale::Pt, "forms.validation.required") => "O campo {field} é obrigatório",
        (Locale::En, "forms.validation.email") => "The {field} field must be a valid email",
        (Locale::Pt, "forms.validation.email") => "O campo {field} deve ser um email válido",
        _ => return None,
    };
    Some(message)
}

/// Prefix `path` with the locale, replacing an existing locale prefix
///
/// `/login` becomes `/pt/login`; `/en/login` becomes `/pt/login`.
#[must_use]
pub fn locale_path(locale: Locale, path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
    let remainder = if first.parse::<Locale>().is_ok() {
        rest
    } else {
        trimmed
    };

    if remainder.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{remainder}", locale.code())
    }
}

/// Redirect target for a route whose `{lang}` segment is not supported
///
/// `None` when the language is supported.
#[must_use]
pub fn guard_locale(lang: &str) -> Option<String> {
    if lang.parse::<Locale>().is_ok() {
        None
    } else {
        Some(format!("/{}", Locale::En.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes_only() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("pt".parse::<Locale>(), Ok(Locale::Pt));
        assert_eq!("fr".parse::<Locale>(), Err(UnknownLocale("fr".to_string())));
    }

    #[test]
    fn translates_and_falls_back_to_key() {
        assert_eq!(t(Locale::En, keys::API_ERROR), "API error");
        assert_eq!(t(Locale::Pt, keys::EVENT_NOT_FOUND), "Evento não encontrado");
        assert_eq!(t(Locale::Pt, keys::LOGIN_REQUIRED), "Você precisa entrar primeiro");
        assert_eq!(t(Locale::Pt, "missing.key"), "missing.key");
    }

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(
            t_with(Locale::En, "forms.validation.required", &[("field", "email")]),
            "The email field is required"
        );
    }

    #[test]
    fn locale_path_adds_or_replaces_prefix() {
        assert_eq!(locale_path(Locale::Pt, "/login"), "/pt/login");
        assert_eq!(locale_path(Locale::Pt, "/en/login"), "/pt/login");
        assert_eq!(locale_path(Locale::En, "/"), "/en");
        assert_eq!(locale_path(Locale::En, "/pt"), "/en");
        assert_eq!(locale_path(Locale::En, "/english/page"), "/en/english/page");
    }

    #[test]
    fn guard_redirects_unknown_languages() {
        assert_eq!(guard_locale("pt"), None);
        assert_eq!(guard_locale("de"), Some("/en".to_string()));
    }
}
