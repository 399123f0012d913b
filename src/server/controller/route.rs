use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        route::{RouteDetailDto, RouteDto},
    },
    server::{error::AppError, service::route::RouteService, state::AppState},
};

/// Tag for grouping route catalog endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "routes";

/// Get every catalog route.
///
/// Routes are ordered by name and carry relation counters and their mean rating.
///
/// # Returns
/// - `200 OK` - All routes with `count`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/routes",
    tag = ROUTE_TAG,
    responses(
        (status = 200, description = "All catalog routes", body = ApiResponse<Vec<RouteDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_routes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let routes = RouteService::new(&state.db).get_all().await?;
    let count = routes.len();
    let data: Vec<RouteDto> = routes.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}

/// Get a route by slug with its reviews and latest photos.
///
/// # Arguments
/// - `slug` - URL slug of the route
///
/// # Returns
/// - `200 OK` - Route detail
/// - `404 Not Found` - No route with this slug
#[utoipa::path(
    get,
    path = "/api/routes/{id}",
    tag = ROUTE_TAG,
    params(("id" = String, Path, description = "Route slug")),
    responses(
        (status = 200, description = "Route detail", body = ApiResponse<RouteDetailDto>),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn get_route(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(route.into_dto()))))
}
