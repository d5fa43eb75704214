//! schema.org structured data (JSON-LD).

use crate::error::{SeoError, SeoErrorExt};
use crate::metadata::Synthesizer;
use serde_json::{Value, json};
use vapps_domain::content::AppRecord;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;

const CONTEXT: &str = "https://schema.org";
const CATEGORY: &str = "LifestyleApplication";
const STUDIO_DESCRIPTION: &str = "Mobile app development studio crafting beautiful digital experiences";

/// One breadcrumb step; `path` is site-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub path: String,
}

impl Synthesizer {
    #[must_use]
    pub fn organization(&self) -> Value {
        json!({
            "@context": CONTEXT,
            "@type": "Organization",
            "name": self.settings.name,
            "description": STUDIO_DESCRIPTION,
            "url": self.settings.url("/"),
            "logo": self.settings.url("/logo.png"),
            "sameAs": [],
            "contactPoint": {
                "@type": "ContactPoint",
                "contactType": "customer service",
                "email": self.settings.contact_email,
            },
        })
    }

    #[must_use]
    pub fn software_application(&self, record: &AppRecord, locale: Locale) -> Value {
        let copy = self.translator.app_copy(locale, record);
        let operating_system = record.platforms.display_names().collect::<Vec<_>>().join(", ");

        let mut data = json!({
            "@context": CONTEXT,
            "@type": "SoftwareApplication",
            "name": copy.name,
            "description": copy.description,
            "url": self.url(locale, Route::App(record.slug)),
            "applicationCategory": CATEGORY,
            "operatingSystem": operating_system,
            "offers": {
                "@type": "Offer",
                "price": "0",
                "priceCurrency": "USD",
            },
            "author": {
                "@type": "Organization",
                "name": self.settings.name,
                "url": self.settings.url("/"),
            },
        });

        if let (Some(rating), Value::Object(map)) = (record.rating(), &mut data) {
            map.insert(
                "aggregateRating".to_owned(),
                json!({
                    "@type": "AggregateRating",
                    "ratingValue": rating,
                    "bestRating": "5",
                    "worstRating": "1",
                }),
            );
        }

        data
    }

    #[must_use]
    pub fn breadcrumb(&self, items: &[Crumb]) -> Value {
        let elements: Vec<Value> = items
            .iter()
            .enumerate()
            .map(|(idx, crumb)| {
                json!({
                    "@type": "ListItem",
                    "position": idx + 1,
                    "name": crumb.name,
                    "item": self.settings.url(&crumb.path),
                })
            })
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": elements,
        })
    }

    #[must_use]
    pub fn website(&self) -> Value {
        json!({
            "@context": CONTEXT,
            "@type": "WebSite",
            "name": self.settings.name,
            "url": self.settings.url("/"),
            "description": STUDIO_DESCRIPTION,
            "publisher": {
                "@type": "Organization",
                "name": self.settings.name,
            },
        })
    }

    #[must_use]
    pub fn item_list(&self, locale: Locale) -> Value {
        let apps = vapps_catalog::all();
        let elements: Vec<Value> = apps
            .iter()
            .enumerate()
            .map(|(idx, app)| {
                json!({
                    "@type": "ListItem",
                    "position": idx + 1,
                    "item": {
                        "@type": "SoftwareApplication",
                        "name": app.name,
                        "url": self.url(locale, Route::App(app.slug)),
                        "applicationCategory": CATEGORY,
                    },
                })
            })
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "ItemList",
            "name": format!("{} Portfolio", self.settings.name),
            "description": "Our collection of mobile applications",
            "numberOfItems": apps.len(),
            "itemListElement": elements,
        })
    }
}

/// Wraps structured data in a `<script type="application/ld+json">` element.
///
/// `<` is emitted as `\u003c` so the payload cannot close the element early.
///
/// # Errors
/// Returns [`SeoError::Serialize`] if `data` cannot be serialized.
pub fn script(data: &Value) -> Result<String, SeoError> {
    let body = serde_json::to_string(data).context("Serializing structured data")?;
    Ok(format!(r#"<script type="application/ld+json">{}</script>"#, body.replace('<', "\\u003c")))
}
