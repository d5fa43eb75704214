//! Page `<head>` metadata.

use serde::Serialize;
use vapps_domain::config::SiteSettings;
use vapps_domain::content::AppRecord;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_i18n::{Translator, localized_path};

/// Keywords appended to every page.
pub const SITE_KEYWORDS: [&str; 6] =
    ["apps", "mobile apps", "software", "design", "development", "digital experiences"];

/// Social preview image of pages without an app logo.
pub const OG_IMAGE: &str = "/og-image.png";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: Option<String>,
    pub alternates: Vec<Alternate>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

/// `hreflang` alternate; `x-default` points at the default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub locale: &'static str,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const ALL: Self = Self { index: true, follow: true };
    pub const NO_INDEX: Self = Self { index: false, follow: true };

    /// Value of `<meta name="robots">`.
    #[must_use]
    pub const fn content(self) -> &'static str {
        match (self.index, self.follow) {
            (true, true) => "index, follow",
            (true, false) => "index, nofollow",
            (false, true) => "noindex, follow",
            (false, false) => "noindex, nofollow",
        }
    }
}

/// Builds page metadata and structured data from the site settings and catalogs.
///
/// Every method is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    pub(crate) settings: SiteSettings,
    pub(crate) translator: Translator,
}

impl Synthesizer {
    #[must_use]
    pub const fn new(settings: SiteSettings, translator: Translator) -> Self {
        Self { settings, translator }
    }

    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Absolute URL of `route` in `locale`.
    #[must_use]
    pub fn url(&self, locale: Locale, route: Route<'_>) -> String {
        self.settings.url(&localized_path(locale, self.settings.default_locale, &route.to_string()))
    }

    /// One alternate per locale plus `x-default`.
    #[must_use]
    pub fn alternates(&self, route: Route<'_>) -> Vec<Alternate> {
        Locale::ALL
            .into_iter()
            .map(|locale| Alternate { hreflang: locale.as_str().to_owned(), href: self.url(locale, route) })
            .chain(std::iter::once(Alternate {
                hreflang: "x-default".to_owned(),
                href: self.url(self.settings.default_locale, route),
            }))
            .collect()
    }

    /// Metadata of an application page.
    #[must_use]
    pub fn synthesize(&self, record: &AppRecord, locale: Locale) -> PageMetadata {
        let copy = self.translator.app_copy(locale, record);
        let title = format!("{} - {} | {}", copy.name, copy.tagline, self.settings.name);

        let keywords = std::iter::once(copy.name.to_owned())
            .chain(record.platforms.display_names().map(str::to_owned))
            .chain(copy.features.iter().map(|f| f.title.to_owned()))
            .chain(SITE_KEYWORDS.iter().map(|k| (*k).to_owned()))
            .collect();

        let image = Image {
            url: self.settings.url(record.logo),
            width: 512,
            height: 512,
            alt: copy.name.to_owned(),
        };

        self.page(locale, Route::App(record.slug), title, copy.description.to_owned(), keywords, image)
    }

    /// Metadata of the home page.
    #[must_use]
    pub fn home(&self, locale: Locale) -> PageMetadata {
        let title = self.translator.text(locale, "metadata.title").to_owned();
        let description = self.translator.text(locale, "metadata.description").to_owned();
        let keywords = SITE_KEYWORDS.iter().map(|k| (*k).to_owned()).collect();
        let image = Image {
            url: self.settings.url(OG_IMAGE),
            width: 1200,
            height: 630,
            alt: self.settings.name.clone(),
        };

        self.page(locale, Route::Home, title, description, keywords, image)
    }

    /// Metadata of an application's privacy policy page.
    #[must_use]
    pub fn privacy(&self, record: &AppRecord, locale: Locale) -> PageMetadata {
        let args = [("app", record.name)];
        let title = self.translator.format(locale, "privacy.metaTitle", &args);
        let description = self.translator.format(locale, "privacy.metaDescription", &args);
        let keywords = [record.name, "privacy policy"].into_iter().map(str::to_owned).collect();
        let image = Image {
            url: self.settings.url(record.logo),
            width: 512,
            height: 512,
            alt: record.name.to_owned(),
        };

        self.page(locale, Route::Privacy(record.slug), title, description, keywords, image)
    }

    /// Metadata of the not-found page: no canonical address and `noindex`.
    #[must_use]
    pub fn not_found(&self, locale: Locale) -> PageMetadata {
        let title = format!("{} | {}", self.translator.text(locale, "metadata.notFoundTitle"), self.settings.name);
        let description = self.translator.text(locale, "metadata.notFoundDescription").to_owned();

        PageMetadata {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: None,
                site_name: self.settings.name.clone(),
                kind: "website",
                locale: locale.og_locale(),
                images: Vec::new(),
            },
            twitter: TwitterCard {
                card: "summary",
                title: title.clone(),
                description: description.clone(),
                images: Vec::new(),
            },
            title,
            description,
            keywords: Vec::new(),
            canonical: None,
            alternates: Vec::new(),
            robots: Robots::NO_INDEX,
        }
    }

    fn page(
        &self,
        locale: Locale,
        route: Route<'_>,
        title: String,
        description: String,
        keywords: Vec<String>,
        image: Image,
    ) -> PageMetadata {
        let canonical = self.url(locale, route);

        PageMetadata {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: Some(canonical.clone()),
                site_name: self.settings.name.clone(),
                kind: "website",
                locale: locale.og_locale(),
                images: vec![image.clone()],
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: title.clone(),
                description: description.clone(),
                images: vec![image.url],
            },
            title,
            description,
            keywords,
            canonical: Some(canonical),
            alternates: self.alternates(route),
            robots: Robots::ALL,
        }
    }
}
