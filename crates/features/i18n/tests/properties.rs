use proptest::prelude::*;
use vapps_domain::locale::Locale;
use vapps_i18n::{LocaleResolver, Negotiation, localized_path, resolve, split_locale};

fn locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

proptest! {
    #[test]
    fn resolve_always_yields_a_supported_locale(hint in ".{0,12}") {
        let locale = resolve(Some(&hint));
        prop_assert!(Locale::ALL.contains(&locale));
    }

    #[test]
    fn supported_tags_resolve_to_themselves(locale in locale(), region in "[A-Z]{2}") {
        prop_assert_eq!(resolve(Some(locale.as_str())), locale);
        let tagged = format!("{locale}-{region}");
        prop_assert_eq!(resolve(Some(&tagged)), locale);
    }

    #[test]
    fn split_undoes_localized_path(locale in locale(), path in "(/[a-z0-9-]{1,10}){0,3}") {
        let path = if path.is_empty() { "/".to_owned() } else { path };
        let localized = localized_path(locale, Locale::En, &path);
        let (found, rest) = split_locale(&localized);

        if locale == Locale::En {
            prop_assume!(split_locale(&path).0.is_none());
            prop_assert_eq!(found, None);
        } else {
            prop_assert_eq!(found, Some(locale));
        }
        prop_assert_eq!(rest, path.as_str());
    }

    #[test]
    fn negotiation_serves_or_redirects_consistently(
        prefix in proptest::option::of(locale()),
        body in "(/[a-z]{3,6}){0,2}",
        cookie in proptest::option::of("[a-z]{2}"),
    ) {
        let mut path = prefix.map(|l| format!("/{l}")).unwrap_or_default();
        path.push_str(&body);
        if path.is_empty() {
            path.push('/');
        }

        let resolver = LocaleResolver::new(Locale::En);
        match resolver.negotiate(&path, cookie.as_deref(), None) {
            Negotiation::Serve { path: served, .. } => {
                prop_assert_eq!(split_locale(&served).0, None);
            },
            Negotiation::Redirect { locale, location } => {
                prop_assert_eq!(split_locale(&location).0, (locale != Locale::En).then_some(locale));
            },
        }
    }
}
