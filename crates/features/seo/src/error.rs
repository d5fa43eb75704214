use std::borrow::Cow;

/// A specialized [`SeoError`] enum of this crate.
#[vapps_derive::site_error]
pub enum SeoError {
    /// Writing a document into its buffer failed.
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },
    /// Structured data could not be serialized.
    #[error("Serialize error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
