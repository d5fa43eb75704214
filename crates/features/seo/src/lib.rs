//! # Metadata Synthesizer
//!
//! Everything search engines and social previews read: `<head>` metadata per page,
//! schema.org structured data, the sitemap and `robots.txt`.
//!
//! All output is a deterministic function of the site settings, the catalogs and
//! the explicit inputs (the sitemap `lastmod` date included), so rendering the same
//! page twice yields identical bytes.

mod error;
pub mod head;
pub mod jsonld;
pub mod markup;
pub mod metadata;
pub mod robots;
pub mod sitemap;

pub use crate::error::{SeoError, SeoErrorExt};
pub use crate::metadata::{PageMetadata, Synthesizer};
use vapps_domain::config::SiteSettings;
use vapps_i18n::Translator;
use vapps_kernel::domain::registry::InitializedSlice;

/// Seo feature state
#[vapps_derive::site_slice]
pub struct Seo {
    pub synthesizer: Synthesizer,
}

/// Initialize the seo feature.
///
/// # Errors
/// Currently infallible; the signature matches the other feature initializers.
pub fn init(settings: SiteSettings, translator: Translator) -> Result<InitializedSlice, SeoError> {
    tracing::info!(base_url = %settings.base_url, "Seo slice initialized");
    let synthesizer = Synthesizer::new(settings, translator);

    Ok(InitializedSlice::new(Seo::new(SeoInner { synthesizer })))
}
