use vapps_domain::locale::Locale;

/// Maps locale hints onto the closed set of supported locales.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResolver {
    default: Locale,
}

impl LocaleResolver {
    #[must_use]
    pub const fn new(default: Locale) -> Self {
        Self { default }
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    /// Returns the hinted locale when it is supported, otherwise the default.
    #[must_use]
    pub fn resolve(&self, hint: Option<&str>) -> Locale {
        hint.and_then(Locale::parse).unwrap_or(self.default)
    }
}

/// [`LocaleResolver::resolve`] with the built-in default locale.
#[must_use]
pub fn resolve(hint: Option<&str>) -> Locale {
    LocaleResolver::default().resolve(hint)
}

/// Picks the best supported locale from an `Accept-Language` header.
///
/// Entries are ranked by q-value (missing means `1`); ties keep header order.
/// Entries with `q=0` or a q-value outside `(0, 1]` (including `NaN` and `inf`) are ignored.
#[must_use]
pub fn preferred_locale(header: &str) -> Option<Locale> {
    let mut ranked: Vec<(Locale, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let locale = Locale::parse(parts.next()?)?;
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
            (quality > 0.0 && quality <= 1.0).then_some((locale, quality))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.first().map(|(locale, _)| *locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_hint_falls_back_to_default() {
        assert_eq!(resolve(Some("fr")), Locale::En);
        assert_eq!(resolve(None), Locale::En);
        assert_eq!(LocaleResolver::new(Locale::Tr).resolve(Some("de")), Locale::Tr);
    }

    #[test]
    fn supported_hint_resolves_to_itself() {
        assert_eq!(resolve(Some("tr")), Locale::Tr);
        assert_eq!(resolve(Some("tr-TR")), Locale::Tr);
        assert_eq!(resolve(Some("en")), Locale::En);
    }

    #[test]
    fn accept_language_honors_quality() {
        assert_eq!(preferred_locale("fr-FR,fr;q=0.9,tr;q=0.8,en;q=0.7"), Some(Locale::Tr));
        assert_eq!(preferred_locale("en;q=0.5, tr-TR"), Some(Locale::Tr));
        assert_eq!(preferred_locale("tr;q=0.6, en;q=0.6"), Some(Locale::Tr));
    }

    #[test]
    fn accept_language_ignores_rejected_and_unknown_entries() {
        assert_eq!(preferred_locale("tr;q=0, de"), None);
        assert_eq!(preferred_locale("*"), None);
        assert_eq!(preferred_locale(""), None);
        assert_eq!(preferred_locale("tr;q=abc, en"), Some(Locale::En));
    }

    #[test]
    fn accept_language_rejects_out_of_range_quality() {
        assert_eq!(preferred_locale("tr;q=5, en;q=0.9"), Some(Locale::En));
        assert_eq!(preferred_locale("tr;q=inf, en;q=0.1"), Some(Locale::En));
        assert_eq!(preferred_locale("tr;q=NaN, en;q=0.1"), Some(Locale::En));
        assert_eq!(preferred_locale("tr;q=-1"), None);
        assert_eq!(preferred_locale("tr;q=1, en;q=1.0"), Some(Locale::Tr));
    }
}
