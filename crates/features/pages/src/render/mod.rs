//! Plain semantic HTML documents for every page of the site.
//!
//! Unknown application ids render the not-found document with
//! [`PageStatus::NotFound`]; that is a normal outcome, not an error.

mod app;
mod home;
mod layout;
mod not_found;
mod privacy;

use crate::error::RenderError;
use std::borrow::Cow;
use vapps_domain::locale::Locale;
use vapps_domain::routes::Route;
use vapps_i18n::{Scope, localized_path};
use vapps_seo::Synthesizer;
use vapps_seo::markup::escape;

/// Inputs shared by every rendered page.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub synthesizer: &'a Synthesizer,
    /// Year printed in the footer copyright line.
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub html: String,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub const fn new(synthesizer: &'a Synthesizer, year: i32) -> Self {
        Self { synthesizer, year }
    }

    pub(crate) fn default_locale(&self) -> Locale {
        self.synthesizer.settings().default_locale
    }

    pub(crate) fn scope(&self, locale: Locale, namespace: &'a str) -> Scope<'a> {
        self.synthesizer.translator().scope(locale, namespace)
    }

    /// Public path of `path` in `locale`.
    pub(crate) fn href(&self, locale: Locale, path: &str) -> String {
        localized_path(locale, self.default_locale(), path)
    }
}

/// Renders `route` in `locale`; `None` renders the not-found page.
///
/// # Errors
/// Returns an error if writing the document fails.
pub fn render(ctx: &RenderContext<'_>, locale: Locale, route: Option<Route<'_>>) -> Result<RenderedPage, RenderError> {
    let found = match route {
        Some(Route::Home) => Some(home::render(ctx, locale)?),
        Some(Route::App(id)) => match vapps_catalog::lookup(id) {
            Some(record) => Some(app::render(ctx, locale, record)?),
            None => None,
        },
        Some(Route::Privacy(id)) => match vapps_catalog::lookup(id) {
            Some(record) => Some(privacy::render(ctx, locale, record)?),
            None => None,
        },
        None => None,
    };

    match found {
        Some(html) => Ok(RenderedPage { status: PageStatus::Ok, html }),
        None => {
            tracing::debug!(%locale, ?route, "Rendering not-found page");
            Ok(RenderedPage { status: PageStatus::NotFound, html: not_found::render(ctx, locale)? })
        },
    }
}

/// Parses an unprefixed path and renders it in `locale`.
///
/// # Errors
/// Returns an error if writing the document fails.
pub fn render_path(ctx: &RenderContext<'_>, locale: Locale, path: &str) -> Result<RenderedPage, RenderError> {
    render(ctx, locale, Route::parse(path))
}

/// Minimal document sending static hosts on to `location`.
#[must_use]
pub fn redirect_stub(location: &str) -> String {
    let location = escape(location);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Redirecting</title>\n\
         <meta name=\"robots\" content=\"noindex\">\n<meta http-equiv=\"refresh\" content=\"0; url={location}\">\n\
         <link rel=\"canonical\" href=\"{location}\">\n</head>\n<body>\n<p><a href=\"{location}\">{location}</a></p>\n\
         </body>\n</html>\n"
    )
}

/// Escaped translation; shorthand used by every section writer.
pub(crate) fn t(scope: &Scope<'_>, key: &str) -> String {
    escape(&scope.t(key)).into_owned()
}

pub(crate) fn esc(text: &str) -> Cow<'_, str> {
    escape(text)
}
