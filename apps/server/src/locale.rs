//! Locale negotiation middleware for page requests.

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, LOCATION, SET_COOKIE, VARY};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use vapps::domain::constants::LOCALE_COOKIE;
use vapps::domain::locale::Locale;
use vapps::features::i18n::{I18n, LocaleResolver, Negotiation};
use vapps::kernel::server::state::SiteState;

/// One year, in seconds.
const COOKIE_MAX_AGE: u32 = 31_536_000;

/// Prefixes never subject to negotiation.
const PASSTHROUGH: [&str; 2] = ["/api", "/health"];

/// Locale and unprefixed path a page request is served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestLocale {
    pub(crate) locale: Locale,
    pub(crate) path: String,
}

/// Resolves the locale of page requests and redirects to the canonical
/// locale-prefixed address when needed. The choice is stored in the locale cookie.
pub(crate) async fn negotiate_locale(State(state): State<SiteState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path();
    if !is_page_path(path) {
        return next.run(req).await;
    }

    let headers = req.headers();
    let cookie = locale_cookie(headers);
    let accept = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());

    let negotiation = match state.get_slice::<I18n>() {
        Some(i18n) => i18n.resolver.negotiate(path, cookie.as_deref(), accept),
        None => LocaleResolver::new(state.config.site.default_locale).negotiate(path, cookie.as_deref(), accept),
    };

    match negotiation {
        Negotiation::Redirect { locale, location } => {
            let location = match req.uri().query() {
                Some(query) => format!("{location}?{query}"),
                None => location,
            };
            tracing::debug!(from = %req.uri(), to = %location, %locale, "Locale redirect");
            redirect(&location, locale)
        },
        Negotiation::Serve { locale, path } => {
            let remember = cookie.as_deref().and_then(Locale::parse) != Some(locale);
            req.extensions_mut().insert(RequestLocale { locale, path });

            let mut response = next.run(req).await;
            let headers = response.headers_mut();
            headers.insert(VARY, HeaderValue::from_static("Cookie, Accept-Language"));
            if let Some(cookie) = remember.then(|| locale_cookie_header(locale)).flatten() {
                headers.append(SET_COOKIE, cookie);
            }
            response
        },
    }
}

/// Page paths exclude the API, health checks and anything that looks like a file.
pub(crate) fn is_page_path(path: &str) -> bool {
    let passthrough = PASSTHROUGH
        .iter()
        .any(|prefix| path.strip_prefix(prefix).is_some_and(|rest| rest.is_empty() || rest.starts_with('/')));
    let file_like = path.rsplit('/').next().is_some_and(|segment| segment.contains('.'));

    !passthrough && !file_like
}

fn locale_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LOCALE_COOKIE)
        .map(|(_, value)| value.trim().to_owned())
}

fn locale_cookie_header(locale: Locale) -> Option<HeaderValue> {
    let cookie = format!("{LOCALE_COOKIE}={locale}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax");
    HeaderValue::from_str(&cookie)
        .inspect_err(|err| tracing::warn!(%locale, error = %err, "Locale cookie is not a valid header value"))
        .ok()
}

fn redirect(location: &str, locale: Locale) -> Response {
    let Ok(target) = HeaderValue::from_str(location) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut response = StatusCode::TEMPORARY_REDIRECT.into_response();
    let headers = response.headers_mut();
    headers.insert(LOCATION, target);
    headers.insert(VARY, HeaderValue::from_static("Cookie, Accept-Language"));
    if let Some(cookie) = locale_cookie_header(locale) {
        headers.append(SET_COOKIE, cookie);
    }
    response
}
