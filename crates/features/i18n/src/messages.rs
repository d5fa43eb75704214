//! Embedded per-locale message catalogs.
//!
//! Keys are dotted paths into the JSON tree (`hero.title1`); numeric segments index
//! arrays (`apps.viona.features.0.title`). Lookups fall back from the requested
//! locale to the default locale and finally to the key itself.

use crate::error::{I18nError, I18nErrorExt};
use fxhash::FxHashMap;
use serde_json::Value;
use std::sync::Arc;
use vapps_domain::locale::Locale;

const EN: &str = include_str!("../messages/en.json");
const TR: &str = include_str!("../messages/tr.json");

const fn source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN,
        Locale::Tr => TR,
    }
}

/// Parsed message catalogs for every supported locale.
#[derive(Debug, Clone)]
pub struct Translator {
    default: Locale,
    catalogs: Arc<FxHashMap<Locale, Value>>,
}

impl Translator {
    /// Parses the catalogs compiled into the binary.
    ///
    /// # Errors
    /// Returns an error if a catalog is not a JSON object.
    pub fn embedded(default: Locale) -> Result<Self, I18nError> {
        let mut catalogs = FxHashMap::default();

        for locale in Locale::ALL {
            let value: Value = serde_json::from_str(source(locale)).context(locale.as_str())?;
            if !value.is_object() {
                return Err(I18nError::Malformed {
                    message: "catalog root must be an object".into(),
                    context: Some(locale.as_str().into()),
                });
            }
            catalogs.insert(locale, value);
        }

        Ok(Self { default, catalogs: Arc::new(catalogs) })
    }

    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    /// Raw value at `key` in exactly `locale`, without fallback.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&Value> {
        key.split('.').try_fold(self.catalogs.get(&locale)?, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        })
    }

    /// Raw value at `key`, falling back to the default locale.
    #[must_use]
    pub fn raw(&self, locale: Locale, key: &str) -> Option<&Value> {
        self.get(locale, key).or_else(|| self.get(self.default, key))
    }

    /// Text at `key`; the key itself when neither locale has a string there.
    #[must_use]
    pub fn text<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        let text = self.get(locale, key).and_then(Value::as_str).or_else(|| {
            tracing::debug!(%locale, key, "Message missing, using default locale");
            self.get(self.default, key).and_then(Value::as_str)
        });
        text.unwrap_or(key)
    }

    /// Text at `key`, or `fallback` when neither locale has a string there.
    #[must_use]
    pub fn text_or<'a>(&'a self, locale: Locale, key: &str, fallback: &'a str) -> &'a str {
        self.raw(locale, key).and_then(Value::as_str).unwrap_or(fallback)
    }

    /// Text at `key` with `{name}` placeholders substituted from `args`.
    #[must_use]
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.text(locale, key), args)
    }

    /// Number of entries of the array at `key` (after fallback), `0` if absent.
    #[must_use]
    pub fn len(&self, locale: Locale, key: &str) -> usize {
        self.raw(locale, key).and_then(Value::as_array).map_or(0, Vec::len)
    }

    /// Borrows a view bound to one locale and namespace.
    #[must_use]
    pub fn scope<'a>(&'a self, locale: Locale, namespace: &'a str) -> Scope<'a> {
        Scope { translator: self, locale, namespace }
    }
}

/// Messages of one namespace in one locale.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    translator: &'a Translator,
    locale: Locale,
    namespace: &'a str,
}

impl Scope<'_> {
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.text(self.locale, &self.key(key)).to_owned()
    }

    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.translator.format(self.locale, &self.key(key), args)
    }

    #[must_use]
    pub fn len(&self, key: &str) -> usize {
        self.translator.len(self.locale, &self.key(key))
    }

    fn key(&self, key: &str) -> String {
        format!("{}.{key}", self.namespace)
    }
}

/// Replaces `{name}` placeholders; unknown placeholders are kept verbatim.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let name = &tail[1..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_replaces_known_placeholders() {
        assert_eq!(interpolate("{count} active projects", &[("count", "5")]), "5 active projects");
        assert_eq!(interpolate("© {year} {name}", &[("year", "2026")]), "© 2026 {name}");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("", &[("a", "b")]), "");
    }
}
