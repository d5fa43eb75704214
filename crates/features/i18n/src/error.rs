use std::borrow::Cow;

/// A specialized [`I18nError`] enum of this crate.
#[vapps_derive::site_error]
pub enum I18nError {
    /// An embedded catalog is not valid JSON.
    #[error("Message catalog error{}: {source}", format_context(.context))]
    Catalog { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// A catalog parsed but does not have the expected shape.
    #[error("Malformed message catalog{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
