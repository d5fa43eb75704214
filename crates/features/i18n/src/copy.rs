//! Localized copy of an application record.

use crate::messages::Translator;
use vapps_domain::content::AppRecord;
use vapps_domain::locale::Locale;

/// Record texts in one locale; any text missing from the catalogs falls back to the
/// record's own (English) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCopy<'a> {
    pub name: &'a str,
    pub tagline: &'a str,
    pub description: &'a str,
    pub long_description: Option<&'a str>,
    pub features: Vec<FeatureCopy<'a>>,
    pub testimonial: Option<TestimonialCopy<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCopy<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialCopy<'a> {
    pub quote: &'a str,
    pub author: &'a str,
    pub role: &'a str,
}

impl AppCopy<'_> {
    /// Paragraphs of the long description, falling back to the short description.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.long_description
            .unwrap_or(self.description)
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

impl Translator {
    /// Localized texts of `record` under `apps.{slug}.*`.
    #[must_use]
    pub fn app_copy<'a>(&'a self, locale: Locale, record: &'a AppRecord) -> AppCopy<'a> {
        let base = format!("apps.{}", record.slug);
        let text = |field: &str, fallback: &'a str| self.text_or(locale, &format!("{base}.{field}"), fallback);

        let features = record
            .features
            .iter()
            .enumerate()
            .map(|(idx, feature)| FeatureCopy {
                title: text(&format!("features.{idx}.title"), feature.title),
                description: text(&format!("features.{idx}.description"), feature.description),
            })
            .collect();

        let testimonial = record.testimonial.as_ref().map(|t| TestimonialCopy {
            quote: text("testimonial.quote", t.quote),
            author: text("testimonial.author", t.author),
            role: text("testimonial.role", t.role),
        });

        AppCopy {
            name: text("name", record.name),
            tagline: text("tagline", record.tagline),
            description: text("description", record.description),
            long_description: record.long_description.map(|long| text("longDescription", long)),
            features,
            testimonial,
        }
    }
}
