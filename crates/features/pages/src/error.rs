use std::borrow::Cow;
use vapps_seo::SeoError;

/// A specialized [`RenderError`] enum of this crate.
#[vapps_derive::site_error]
pub enum RenderError {
    /// Writing markup into the page buffer failed.
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },
    /// Metadata or structured data could not be produced.
    #[error("Seo error{}: {source}", format_context(.context))]
    Seo { source: SeoError, context: Option<Cow<'static, str>> },
}
