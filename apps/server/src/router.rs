use crate::{locale, pages};
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use vapps::kernel::server::state::SiteState;
use vapps::server::router::{content_router, system_router};

#[derive(OpenApi)]
#[openapi(info(title = "Various Apps", description = "Read-only content API of the Various Apps portfolio"))]
struct ApiDoc;

pub(crate) fn init(state: SiteState) -> Router {
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .nest("/api", content_router())
        .with_state(state.clone())
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api/docs", api_doc);

    // Pages are the fallback so every unmatched path goes through negotiation.
    let site_routes = Router::new()
        .route("/sitemap.xml", get(pages::sitemap))
        .route("/robots.txt", get(pages::robots))
        .fallback(pages::page)
        .with_state(state.clone());

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(site_routes)
        .layer(middleware::from_fn_with_state(state, locale::negotiate_locale))
        .layer(TraceLayer::new_for_http())
}
