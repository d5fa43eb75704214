//! JSON content API: `GET /api/apps` and `GET /api/apps/{id}`.

pub mod dto;
mod handlers;

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vapps_kernel::server::state::SiteState;

/// Content routes, to be nested under `/api`.
pub fn router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_apps))
        .routes(routes!(handlers::get_app))
}
