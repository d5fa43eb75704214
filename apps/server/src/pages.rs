//! Page, sitemap and `robots.txt` handlers.

use crate::locale::RequestLocale;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LANGUAGE, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use chrono::{Datelike, Utc};
use tower::ServiceExt;
use tower_http::services::ServeDir;
use vapps::features::pages::{PageStatus, RenderContext, render_path};
use vapps::features::seo::robots::robots_txt;
use vapps::features::seo::sitemap::to_xml;
use vapps::features::seo::Seo;
use vapps::kernel::server::state::SiteState;

/// Renders the negotiated page; requests that skipped negotiation are static files.
pub(crate) async fn page(State(state): State<SiteState>, req: Request) -> Response {
    let Some(RequestLocale { locale, path }) = req.extensions().get::<RequestLocale>().cloned() else {
        return serve_static(&state, req).await;
    };

    let seo = match state.try_get_slice::<Seo>() {
        Ok(seo) => seo,
        Err(err) => {
            tracing::error!(error = %err, "Seo slice missing");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    let ctx = RenderContext::new(&seo.synthesizer, Utc::now().year());
    match render_path(&ctx, locale, &path) {
        Ok(rendered) => {
            let status = match rendered.status {
                PageStatus::Ok => StatusCode::OK,
                PageStatus::NotFound => StatusCode::NOT_FOUND,
            };
            let language = HeaderValue::from_static(locale.as_str());
            (status, [(CONTENT_LANGUAGE, language)], Html(rendered.html)).into_response()
        },
        Err(err) => {
            tracing::error!(error = %err, %locale, %path, "Page rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

pub(crate) async fn sitemap(State(state): State<SiteState>) -> Response {
    let seo = match state.try_get_slice::<Seo>() {
        Ok(seo) => seo,
        Err(err) => {
            tracing::error!(error = %err, "Seo slice missing");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    let entries = seo.synthesizer.sitemap_entries(&vapps::features::pages::pages(), Utc::now().date_naive());
    match to_xml(&entries) {
        Ok(xml) => ([(CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Sitemap serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

pub(crate) async fn robots(State(state): State<SiteState>) -> Response {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.config.site)).into_response()
}

async fn serve_static(state: &SiteState, req: Request) -> Response {
    match ServeDir::new(&state.config.storage.static_dir).oneshot(req).await {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}
