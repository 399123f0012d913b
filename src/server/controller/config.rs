use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ApiResponse, config::ConfigDto},
    server::service::catalog::CatalogService,
};

/// Tag for grouping configuration endpoints in OpenAPI documentation
pub static CONFIG_TAG: &str = "config";

/// Get the static catalogs used by route call forms.
///
/// Returns the predefined meeting points, the route paces with their labels and the
/// route levels.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = CONFIG_TAG,
    responses(
        (status = 200, description = "Form catalogs", body = ApiResponse<ConfigDto>)
    ),
)]
pub async fn get_config() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::new(CatalogService::config())))
}
