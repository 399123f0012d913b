use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        favorite::{FavoriteDto, FavoriteStatusDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::favorite::FavoriteWithCounts,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorites";

/// Add a route to the user's favorites.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `201 Created` - Favorite with route summary
/// - `404 Not Found` - Route does not exist
/// - `409 Conflict` - Route already a favorite
#[utoipa::path(
    post,
    path = "/api/routes/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = Uuid, Path, description = "Route ID")),
    responses(
        (status = 201, description = "Route added to favorites", body = ApiResponse<FavoriteDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 409, description = "Already a favorite", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let favorite = FavoriteService::new(&state.db).add(user.id, route_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::new(favorite.into_dto())
                .with_message("Route added to favorites successfully"),
        ),
    ))
}

/// Remove a route from the user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `404 Not Found` - Route was not a favorite
#[utoipa::path(
    delete,
    path = "/api/routes/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = Uuid, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route removed from favorites", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    FavoriteService::new(&state.db)
        .remove(user.id, route_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Route removed from favorites successfully")),
    ))
}

/// Get the user's favorite routes, newest first.
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = FAVORITE_TAG,
    responses(
        (status = 200, description = "Favorites with route counters", body = ApiResponse<Vec<FavoriteDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let favorites = FavoriteService::new(&state.db).get_mine(user.id).await?;
    let count = favorites.len();
    let data: Vec<FavoriteDto> = favorites
        .into_iter()
        .map(FavoriteWithCounts::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}

/// Check whether a route is among the user's favorites.
#[utoipa::path(
    get,
    path = "/api/favorites/check/{route_id}",
    tag = FAVORITE_TAG,
    params(("route_id" = Uuid, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Favorite flag", body = ApiResponse<FavoriteStatusDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn check_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let is_favorite = FavoriteService::new(&state.db)
        .is_favorite(user.id, route_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(FavoriteStatusDto { is_favorite })),
    ))
}
