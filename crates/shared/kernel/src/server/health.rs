use super::state::SiteState;
use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::LazyLock;
use std::time::Instant;
use vapps_derive::{api_handler, api_model};
use vapps_domain::constants::SYSTEM_TAG;

static STARTED: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_model]
/// Liveness report of the site process
pub struct HealthResponse {
    /// Always `up` while the process serves requests
    pub status: String,
    /// Crate version of the running build
    pub version: String,
    /// Seconds since the first health probe
    pub uptime: u64,
    /// Locale served for unprefixed paths
    pub default_locale: String,
    /// Registered feature slices
    pub slices: Vec<String>,
}

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Process liveness and registered feature slices", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<SiteState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: STARTED.elapsed().as_secs(),
        default_locale: state.config.site.default_locale.to_string(),
        slices: state.slice_names().into_iter().map(str::to_owned).collect(),
    };

    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
