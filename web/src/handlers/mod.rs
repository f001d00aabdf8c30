//! HTTP request handlers.

pub mod health;
pub mod page;
pub mod registration;

pub use health::health_check;
pub use page::{PageContext, page, root_redirect};
pub use registration::{RegistrationRequest, create_registration};

use axum::response::Redirect;
use eventos_app::i18n::{Locale, guard_locale, locale_path};

/// Locale from a `{lang}` route segment, or the redirect to send instead
pub(crate) fn route_locale(lang: &str) -> Result<Locale, Redirect> {
    if let Some(target) = guard_locale(lang) {
        return Err(Redirect::temporary(&target));
    }
    lang.parse()
        .map_err(|_| Redirect::temporary(&locale_path(Locale::default(), "/")))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn supported_segment_is_a_locale() {
        assert!(matches!(route_locale("pt"), Ok(Locale::Pt)));
    }

    #[test]
    fn unsupported_segment_redirects_to_english() {
        let Err(redirect) = route_locale("fr") else {
            panic!("fr is not supported");
        };
        let response = redirect.into_response();
        assert_eq!(response.headers()["location"], "/en");
    }
}
