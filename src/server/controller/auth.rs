use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::UserDto,
    },
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the currently authenticated user.
///
/// Users authenticating for the first time are created from their identity provider
/// profile before being returned.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Local user record
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(user.into_dto()))))
}
