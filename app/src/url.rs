//! Host-based event resolution

/// Event slug encoded in a request host
///
/// The slug is the first DNS label when the host (port stripped) has more
/// than two labels: `sbc.eventos.com` → `sbc`, `eventos.com` → none.
#[must_use]
pub fn parse_event_slug(host: &str) -> Option<&str> {
    let host = host.rsplit_once(':').map_or(host, |(name, port)| {
        if port.chars().all(|c| c.is_ascii_digit()) { name } else { host }
    });
    let mut labels = host.split('.');
    let first = labels.next()?;
    if labels.count() < 2 || first.is_empty() {
        return None;
    }
    Some(first)
}

/// Slug for this request: the forced slug when configured, else the host's
#[must_use]
pub fn resolve_event_slug<'a>(forced: Option<&'a str>, host: Option<&'a str>) -> Option<&'a str> {
    forced
        .filter(|slug| !slug.is_empty())
        .or_else(|| host.and_then(parse_event_slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn subdomain_is_the_slug() {
        assert_eq!(parse_event_slug("sbc.eventos.com"), Some("sbc"));
        assert_eq!(parse_event_slug("sbc.eventos.com:3000"), Some("sbc"));
        assert_eq!(parse_event_slug("a.b.c.d"), Some("a"));
    }

    #[test]
    fn bare_domain_has_no_slug() {
        assert_eq!(parse_event_slug("eventos.com"), None);
        assert_eq!(parse_event_slug("localhost:3000"), None);
        assert_eq!(parse_event_slug("localhost"), None);
    }

    #[test]
    fn forced_slug_wins() {
        assert_eq!(resolve_event_slug(Some("dev"), Some("sbc.eventos.com")), Some("dev"));
        assert_eq!(resolve_event_slug(Some(""), Some("sbc.eventos.com")), Some("sbc"));
        assert_eq!(resolve_event_slug(None, None), None);
    }

    proptest! {
        #[test]
        fn first_label_of_three_or_more(labels in proptest::collection::vec("[a-z0-9-]{1,12}", 3..6), port in proptest::option::of(1u16..)) {
            let mut host = labels.join(".");
            if let Some(port) = port {
                host = format!("{host}:{port}");
            }
            prop_assert_eq!(parse_event_slug(&host), Some(labels[0].as_str()));
        }

        #[test]
        fn never_a_slug_for_two_labels(a in "[a-z]{1,10}", b in "[a-z]{1,10}") {
            let host = format!("{a}.{b}");
            prop_assert_eq!(parse_event_slug(&host), None);
        }
    }
}
