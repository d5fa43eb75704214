//! # Internationalization
//!
//! Locale handling for the site: the resolver that maps hints onto the supported
//! set, request negotiation (path prefix, cookie, `Accept-Language`), the
//! as-needed path prefix policy, and the embedded message catalogs.
//!
//! ```rust
//! use vapps_domain::locale::Locale;
//! use vapps_i18n::{localized_path, resolve};
//!
//! assert_eq!(resolve(Some("fr")), Locale::En);
//! assert_eq!(localized_path(Locale::Tr, Locale::En, "/apps/viona"), "/tr/apps/viona");
//! ```

mod copy;
mod error;
pub mod messages;
mod negotiate;
mod paths;
mod resolver;

pub use crate::copy::{AppCopy, FeatureCopy, TestimonialCopy};
pub use crate::error::{I18nError, I18nErrorExt};
pub use crate::messages::{Scope, Translator, interpolate};
pub use crate::negotiate::Negotiation;
pub use crate::paths::{anchor_path, localized_path, split_locale};
pub use crate::resolver::{LocaleResolver, preferred_locale, resolve};
use vapps_domain::locale::Locale;
use vapps_kernel::domain::registry::InitializedSlice;

/// I18n feature state
#[vapps_derive::site_slice]
pub struct I18n {
    pub resolver: LocaleResolver,
    pub translator: Translator,
}

impl I18n {
    /// Builds the slice state from the embedded catalogs.
    ///
    /// # Errors
    /// Returns an error if an embedded catalog cannot be parsed.
    pub fn load(default: Locale) -> Result<Self, I18nError> {
        let translator = Translator::embedded(default).context("Loading embedded catalogs")?;
        Ok(Self::new(I18nInner { resolver: LocaleResolver::new(default), translator }))
    }
}

/// Initialize the i18n feature from loaded state.
///
/// The caller keeps a clone of [`I18n::translator`] for slices that render text.
#[must_use]
pub fn init(slice: I18n) -> InitializedSlice {
    tracing::info!(default = %slice.resolver.default_locale(), locales = Locale::ALL.len(), "I18n slice initialized");

    InitializedSlice::new(slice)
}
