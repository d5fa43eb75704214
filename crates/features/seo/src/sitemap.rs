//! sitemaps.org XML with `xhtml:link` language alternates.

use crate::error::SeoError;
use crate::markup::escape;
use crate::metadata::{Alternate, Synthesizer};
use chrono::NaiveDate;
use std::fmt::Write;
use vapps_domain::locale::Locale;
use vapps_domain::routes::{PageRoute, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: Vec<Alternate>,
}

impl Synthesizer {
    /// Sitemap entries for the home and application pages among `pages`, in order.
    ///
    /// Privacy pages are not listed. `lastmod` is stamped on every entry.
    #[must_use]
    pub fn sitemap_entries(&self, pages: &[PageRoute], lastmod: NaiveDate) -> Vec<SitemapEntry> {
        pages
            .iter()
            .filter_map(|page| {
                let (change_frequency, priority) = match page.route {
                    Route::Home => (ChangeFrequency::Weekly, 1.0),
                    Route::App(_) => (ChangeFrequency::Monthly, 0.8),
                    Route::Privacy(_) => return None,
                };

                let alternates = Locale::ALL
                    .into_iter()
                    .map(|locale| Alternate {
                        hreflang: locale.as_str().to_owned(),
                        href: self.url(locale, page.route),
                    })
                    .collect();

                Some(SitemapEntry {
                    loc: self.url(page.locale, page.route),
                    lastmod,
                    change_frequency,
                    priority,
                    alternates,
                })
            })
            .collect()
    }
}

/// Renders entries as a sitemap document.
///
/// # Errors
/// Returns [`SeoError::Format`] if writing the document fails.
pub fn to_xml(entries: &[SitemapEntry]) -> Result<String, SeoError> {
    let mut out = String::with_capacity(256 + entries.len() * 512);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
    );
    out.push('\n');

    for entry in entries {
        out.push_str("<url>\n");
        writeln!(out, "<loc>{}</loc>", escape(&entry.loc))?;
        for alternate in &entry.alternates {
            writeln!(
                out,
                r#"<xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                escape(&alternate.hreflang),
                escape(&alternate.href)
            )?;
        }
        writeln!(out, "<lastmod>{}</lastmod>", entry.lastmod.format("%Y-%m-%d"))?;
        writeln!(out, "<changefreq>{}</changefreq>", entry.change_frequency.as_str())?;
        writeln!(out, "<priority>{:.1}</priority>", entry.priority)?;
        out.push_str("</url>\n");
    }

    out.push_str("</urlset>\n");
    Ok(out)
}
