//! Facade crate for the Various Apps features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates, it does not implement site logic.
//!
//! ## Usage
//! - Add `vapps` (with the `server` feature for the HTTP application).
//! - Call [`init`] to build every feature slice from the loaded [`SiteConfig`].

pub use vapps_domain as domain;
pub use vapps_kernel as kernel;

use vapps_domain::config::SiteConfig;
use vapps_domain::registry::InitializedSlice;
use vapps_i18n::I18n;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use vapps_catalog::api::router as content_router;
        pub use vapps_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use vapps_catalog as catalog;
    pub use vapps_i18n as i18n;
    pub use vapps_pages as pages;
    pub use vapps_seo as seo;

    /// Slices registered by [`init`](crate::init), in initialization order.
    pub const SLICES: &[&str] = &["Catalog", "I18n", "Seo"];

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "catalog",
        "i18n",
        "seo",
        "pages",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice for the configured site.
///
/// # Errors
/// Returns an error if the content records are invalid or the embedded
/// message catalogs fail to parse.
pub fn init(config: &SiteConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Content registry
    slices.push(features::catalog::init()?);

    // Localization
    let default = config.site.default_locale;
    let i18n = I18n::load(default)?;
    let translator = i18n.translator.clone();
    slices.push(features::i18n::init(i18n));

    // Metadata synthesizer
    slices.push(features::seo::init(config.site.clone(), translator)?);

    Ok(slices)
}
