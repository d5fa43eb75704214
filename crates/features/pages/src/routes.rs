//! Static path enumeration.

use vapps_domain::constants::PRIVACY_APP;
use vapps_domain::locale::Locale;
use vapps_domain::routes::{PageRoute, Route};
use vapps_i18n::localized_path;

/// Every `(locale, id)` pair: locale-major, then registry order.
#[must_use]
pub fn enumerate() -> Vec<(Locale, &'static str)> {
    let ids = vapps_catalog::list_ids();
    Locale::ALL.into_iter().flat_map(|locale| ids.iter().map(move |id| (locale, *id))).collect()
}

/// The full page inventory: per locale the home page, every app page and the
/// privacy policy page.
#[must_use]
pub fn pages() -> Vec<PageRoute> {
    let ids = vapps_catalog::list_ids();

    Locale::ALL
        .into_iter()
        .flat_map(|locale| {
            std::iter::once(Route::Home)
                .chain(ids.iter().copied().map(Route::App))
                .chain(std::iter::once(Route::Privacy(PRIVACY_APP)))
                .map(move |route| PageRoute::new(locale, route))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Public, as-needed prefixed path of a page.
#[must_use]
pub fn page_path(page: &PageRoute, default: Locale) -> String {
    localized_path(page.locale, default, &page.route.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_is_locale_major() {
        let pairs = enumerate();
        assert_eq!(pairs.first(), Some(&(Locale::En, "viona")));
        assert_eq!(pairs[5], (Locale::Tr, "viona"));
        assert_eq!(pairs.last(), Some(&(Locale::Tr, "ai-poster")));
    }

    #[test]
    fn page_paths_follow_the_prefix_policy() {
        let all = pages();
        let paths: Vec<_> = all.iter().map(|p| page_path(p, Locale::En)).collect();
        assert_eq!(paths[0], "/");
        assert_eq!(paths[1], "/apps/viona");
        assert_eq!(paths[6], "/apps/ai-poster/privacy");
        assert_eq!(paths[7], "/tr");
        assert_eq!(paths[13], "/tr/apps/ai-poster/privacy");
    }
}
