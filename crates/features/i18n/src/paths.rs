//! As-needed locale prefixing: the default locale is served unprefixed, every
//! other locale under `/{locale}`.

use std::borrow::Cow;
use vapps_domain::locale::Locale;

/// Applies the as-needed prefix to an absolute site path.
#[must_use]
pub fn localized_path(locale: Locale, default: Locale, path: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };

    if locale == default {
        path.to_owned()
    } else if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    }
}

/// Splits a leading locale segment off a path.
///
/// Only an exact, lowercase segment counts (`/tr`, `/tr/apps/x`); `/track` and `/TR`
/// are left untouched.
#[must_use]
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = trimmed.find('/').map_or((trimmed, ""), |idx| trimmed.split_at(idx));

    match Locale::ALL.into_iter().find(|locale| locale.as_str() == segment) {
        Some(locale) if rest.is_empty() => (Some(locale), "/"),
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

/// Collapses a run of leading `/` or `\` into a single `/`.
///
/// Paths echoed into a `Location` header must not read as `//host` or `/\host`.
#[must_use]
pub fn anchor_path(path: &str) -> Cow<'_, str> {
    let rest = path.trim_start_matches(['/', '\\']);
    if path.starts_with('/') && rest.len() + 1 == path.len() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{rest}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_unprefixed() {
        assert_eq!(localized_path(Locale::En, Locale::En, "/apps/viona"), "/apps/viona");
        assert_eq!(localized_path(Locale::En, Locale::En, ""), "/");
    }

    #[test]
    fn other_locales_are_prefixed() {
        assert_eq!(localized_path(Locale::Tr, Locale::En, "/"), "/tr");
        assert_eq!(localized_path(Locale::Tr, Locale::En, "/apps/viona"), "/tr/apps/viona");
    }

    #[test]
    fn split_recognizes_exact_segments_only() {
        assert_eq!(split_locale("/tr"), (Some(Locale::Tr), "/"));
        assert_eq!(split_locale("/tr/"), (Some(Locale::Tr), "/"));
        assert_eq!(split_locale("/en/apps/viona"), (Some(Locale::En), "/apps/viona"));
        assert_eq!(split_locale("/track"), (None, "/track"));
        assert_eq!(split_locale("/TR/apps"), (None, "/TR/apps"));
        assert_eq!(split_locale("/"), (None, "/"));
    }

    #[test]
    fn anchor_keeps_a_single_leading_slash() {
        assert_eq!(anchor_path("/apps/viona"), "/apps/viona");
        assert_eq!(anchor_path("/"), "/");
        assert_eq!(anchor_path(""), "/");
        assert_eq!(anchor_path("//evil.example/phish"), "/evil.example/phish");
        assert_eq!(anchor_path("/\\evil.example/"), "/evil.example/");
        assert_eq!(anchor_path("\\/\\//x"), "/x");
    }
}
