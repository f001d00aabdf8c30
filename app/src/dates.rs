//! Locale-aware date formatting

use crate::i18n::Locale;
use chrono::{DateTime, Utc};

/// Long date: `October 16, 2026` / `16 de outubro de 2026`
#[must_use]
pub fn format_long_date(date: DateTime<Utc>, locale: Locale) -> String {
    let pattern = match locale {
        Locale::En => "%B %-d, %Y",
        Locale::Pt => "%-d de %B de %Y",
    };
    date.format_localized(pattern, locale.chrono_locale()).to_string()
}

/// Date range of an event, collapsed when it starts and ends on the same day
#[must_use]
pub fn format_date_range(starts_on: DateTime<Utc>, ends_on: DateTime<Utc>, locale: Locale) -> String {
    let start = format_long_date(starts_on, locale);
    if starts_on.date_naive() == ends_on.date_naive() {
        return start;
    }
    let end = format_long_date(ends_on, locale);
    match locale {
        Locale::En => format!("{start} to {end}"),
        Locale::Pt => format!("{start} a {end}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        rfc3339.parse().unwrap()
    }

    #[test]
    fn long_date_per_locale() {
        let date = at("2026-10-16T12:00:00Z");
        assert_eq!(format_long_date(date, Locale::En), "October 16, 2026");
        assert_eq!(format_long_date(date, Locale::Pt), "16 de outubro de 2026");
    }

    #[test]
    fn range_collapses_single_day() {
        let starts_on = at("2026-10-16T09:00:00Z");
        assert_eq!(
            format_date_range(starts_on, at("2026-10-16T18:00:00Z"), Locale::En),
            "October 16, 2026"
        );
        assert_eq!(
            format_date_range(starts_on, at("2026-10-18T18:00:00Z"), Locale::Pt),
            "16 de outubro de 2026 a 18 de outubro de 2026"
        );
    }
}
