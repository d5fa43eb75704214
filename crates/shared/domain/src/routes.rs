//! Page addressing shared by the renderer, the sitemap and the HTTP layer.
//!
//! Paths here never carry a locale prefix; prefixing is applied by the i18n layer.

use crate::constants::PRIVACY_APP;
use crate::locale::Locale;
use std::fmt;

/// A locale-independent page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route<'a> {
    Home,
    App(&'a str),
    /// Privacy policy of an application; only [`PRIVACY_APP`] publishes one.
    Privacy(&'a str),
}

impl<'a> Route<'a> {
    /// Parses an unprefixed path. Anything outside the page tree yields `None`.
    ///
    /// Application ids are not checked against the registry here.
    #[must_use]
    pub fn parse(path: &'a str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some("apps"), Some(id), None, None) if !id.is_empty() => Some(Self::App(id)),
            (Some("apps"), Some(id), Some("privacy"), None) if id == PRIVACY_APP => Some(Self::Privacy(id)),
            _ => None,
        }
    }
}

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::App(id) => write!(f, "/apps/{id}"),
            Self::Privacy(id) => write!(f, "/apps/{id}/privacy"),
        }
    }
}

/// One renderable page: a route in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRoute {
    pub locale: Locale,
    pub route: Route<'static>,
}

impl PageRoute {
    #[must_use]
    pub const fn new(locale: Locale, route: Route<'static>) -> Self {
        Self { locale, route }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_page_tree() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/apps/viona"), Some(Route::App("viona")));
        assert_eq!(Route::parse("/apps/viona/"), Some(Route::App("viona")));
        assert_eq!(Route::parse("/apps/ai-poster/privacy"), Some(Route::Privacy("ai-poster")));
    }

    #[test]
    fn rejects_paths_outside_the_tree() {
        assert_eq!(Route::parse("/apps"), None);
        assert_eq!(Route::parse("/apps/viona/privacy"), None);
        assert_eq!(Route::parse("/apps/ai-poster/terms"), None);
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/apps//x"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for route in [Route::Home, Route::App("qr-sessions"), Route::Privacy(PRIVACY_APP)] {
            let path = route.to_string();
            assert_eq!(Route::parse(&path), Some(route));
        }
    }
}
