use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[vapps_derive::site_error]
pub enum CatalogError {
    /// Two records share the same slug.
    #[error("Duplicate slug{}: {message}", format_context(.context))]
    DuplicateSlug { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A record is missing a mandatory value.
    #[error("Invalid record{}: {message}", format_context(.context))]
    InvalidRecord { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
