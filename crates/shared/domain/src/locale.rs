use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site locales. The set is closed; [`Locale::En`] is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Every supported locale in presentation order.
    pub const ALL: [Self; 2] = [Self::En, Self::Tr];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Native display name used by the language switcher.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Türkçe",
        }
    }

    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Tr => "🇹🇷",
        }
    }

    /// Open Graph `og:locale` value.
    #[must_use]
    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Tr => "tr_TR",
        }
    }

    /// Parses a language tag, ignoring case and any region subtag (`tr-TR`, `en_GB`).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        Self::ALL.into_iter().find(|locale| locale.as_str().eq_ignore_ascii_case(primary))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_region_and_case_variants() {
        assert_eq!(Locale::parse("tr"), Some(Locale::Tr));
        assert_eq!(Locale::parse("TR-tr"), Some(Locale::Tr));
        assert_eq!(Locale::parse("en_GB"), Some(Locale::En));
        assert_eq!(Locale::parse(" en "), Some(Locale::En));
    }

    #[test]
    fn parse_rejects_unsupported_tags() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("*"), None);
    }
}
