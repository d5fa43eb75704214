use crate::paths::{anchor_path, localized_path, split_locale};
use crate::resolver::{LocaleResolver, preferred_locale};
use vapps_domain::locale::Locale;

/// Outcome of locale negotiation for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Negotiation {
    /// Render `path` (locale prefix removed) in `locale`.
    Serve { locale: Locale, path: String },
    /// Send the client to `location`, the canonical address for `locale`.
    Redirect { locale: Locale, location: String },
}

impl Negotiation {
    #[must_use]
    pub const fn locale(&self) -> Locale {
        match self {
            Self::Serve { locale, .. } | Self::Redirect { locale, .. } => *locale,
        }
    }
}

impl LocaleResolver {
    /// Decides which locale a request is served in.
    ///
    /// An explicit path prefix wins. Without one, the locale cookie, then the
    /// `Accept-Language` header, then the default are consulted, and a non-default
    /// choice redirects to the prefixed address. A prefix naming the default locale
    /// redirects to the unprefixed address.
    #[must_use]
    pub fn negotiate(&self, path: &str, cookie: Option<&str>, accept_language: Option<&str>) -> Negotiation {
        let default = self.default_locale();

        if let (Some(locale), rest) = split_locale(path) {
            let rest = anchor_path(rest).into_owned();
            return if locale == default {
                Negotiation::Redirect { locale, location: rest }
            } else {
                Negotiation::Serve { locale, path: rest }
            };
        }

        let locale = cookie
            .and_then(Locale::parse)
            .or_else(|| accept_language.and_then(preferred_locale))
            .unwrap_or(default);

        if locale == default {
            Negotiation::Serve { locale, path: path.to_owned() }
        } else {
            Negotiation::Redirect { locale, location: localized_path(locale, default, path) }
        }
    }
}
