use super::health;
use super::state::SiteState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes every deployment exposes regardless of content: `GET /health`.
pub fn system_router() -> OpenApiRouter<SiteState> {
    OpenApiRouter::new().routes(routes!(health::health_handler))
}
