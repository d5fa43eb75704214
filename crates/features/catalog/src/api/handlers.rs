use super::dto::{AppDetail, AppSummary, ErrorResponse};
use crate::Catalog;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vapps_derive::api_handler;
use vapps_domain::constants::{CONTENT_TAG, FEATURED_APP};
use vapps_kernel::server::state::SiteState;

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { status: status.as_u16(), message: message.into() })).into_response()
}

#[api_handler(
    get,
    path = "/apps",
    responses(
        (status = OK, description = "Every showcased application in presentation order", body = [AppSummary]),
        (status = INTERNAL_SERVER_ERROR, description = "Catalog slice not registered", body = ErrorResponse),
    ),
    tag = CONTENT_TAG,
)]
pub(super) async fn list_apps(State(state): State<SiteState>) -> Response {
    let catalog = match state.try_get_slice::<Catalog>() {
        Ok(catalog) => catalog,
        Err(err) => return error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    let apps: Vec<AppSummary> = catalog
        .records
        .iter()
        .map(|record| AppSummary::from_record(record, record.slug == FEATURED_APP))
        .collect();

    Json(apps).into_response()
}

#[api_handler(
    get,
    path = "/apps/{id}",
    params(("id" = String, Path, description = "Application slug")),
    responses(
        (status = OK, description = "The application record", body = AppDetail),
        (status = NOT_FOUND, description = "No application with this slug", body = ErrorResponse),
    ),
    tag = CONTENT_TAG,
)]
pub(super) async fn get_app(State(state): State<SiteState>, Path(id): Path<String>) -> Response {
    let catalog = match state.try_get_slice::<Catalog>() {
        Ok(catalog) => catalog,
        Err(err) => return error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    match catalog.lookup(&id) {
        Some(record) => Json(AppDetail::from_record(record, record.slug == FEATURED_APP)).into_response(),
        None => {
            tracing::debug!(%id, "Unknown application requested");
            error(StatusCode::NOT_FOUND, format!("Application `{id}` not found"))
        },
    }
}
