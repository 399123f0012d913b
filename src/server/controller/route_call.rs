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
        route_call::{CreateRouteCallDto, RouteCallDto, RouteCallQuery, UpdateRouteCallDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            page::PageRequest,
            route_call::{
                CreateRouteCallParams, RouteCall, RouteCallFilter, UpdateRouteCallParams,
            },
        },
        service::route_call::RouteCallService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping route call endpoints in OpenAPI documentation
pub static ROUTE_CALL_TAG: &str = "route-calls";

/// Schedule a route call.
///
/// The call either targets a catalog route (`routeId`) or a custom route
/// (`customRouteName`). It needs exactly one PRIMARY meeting point and at most one
/// SECONDARY meeting point, and its date must be in the future.
///
/// # Access Control
/// - Authenticated user, who becomes the organizer
///
/// # Returns
/// - `201 Created` - Scheduled route call
/// - `400 Bad Request` - Validation failed
/// - `404 Not Found` - Catalog route does not exist
#[utoipa::path(
    post,
    path = "/api/route-calls",
    tag = ROUTE_CALL_TAG,
    request_body = CreateRouteCallDto,
    responses(
        (status = 201, description = "Route call created", body = ApiResponse<RouteCallDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_route_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateRouteCallDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let params = CreateRouteCallParams::from_dto(user.id, payload).ok_or_else(|| {
        AppError::BadRequest("Either routeId or customRouteName must be provided".to_string())
    })?;
    let route_call = RouteCallService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::new(route_call.into_dto())
                .with_message("Route call created successfully"),
        ),
    ))
}

/// List route calls.
///
/// `upcoming=true` keeps future SCHEDULED or ONGOING calls, soonest first.
/// `upcoming=false` keeps past or closed calls, most recent first. Without it every call is
/// returned by date ascending.
///
/// # Returns
/// - `200 OK` - Page of route calls with pagination metadata
/// - `400 Bad Request` - Invalid filter or pagination values
#[utoipa::path(
    get,
    path = "/api/route-calls",
    tag = ROUTE_CALL_TAG,
    params(RouteCallQuery),
    responses(
        (status = 200, description = "Page of route calls", body = ApiResponse<Vec<RouteCallDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto)
    ),
)]
pub async fn get_route_calls(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RouteCallQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = RouteCallFilter::from_query(&query);
    let request = PageRequest::new(query.page, query.limit);

    let page = RouteCallService::new(&state.db)
        .get_paginated(filter, request)
        .await?;
    let pagination = page.pagination_dto();
    let data: Vec<RouteCallDto> = page.items.into_iter().map(RouteCall::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(data).with_pagination(pagination)),
    ))
}

/// Get a route call with route details, organizer, meeting points and confirmed attendees.
#[utoipa::path(
    get,
    path = "/api/route-calls/{id}",
    tag = ROUTE_CALL_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Route call detail", body = ApiResponse<RouteCallDto>),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
)]
pub async fn get_route_call(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (route_call, attendances) = RouteCallService::new(&state.db).get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(route_call.into_detail_dto(attendances))),
    ))
}

/// Update a route call. Meeting points cannot be changed.
///
/// # Access Control
/// - Organizer
///
/// # Returns
/// - `200 OK` - Updated route call
/// - `403 Forbidden` - Not the organizer
/// - `404 Not Found` - Route call does not exist
#[utoipa::path(
    put,
    path = "/api/route-calls/{id}",
    tag = ROUTE_CALL_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    request_body = UpdateRouteCallDto,
    responses(
        (status = 200, description = "Route call updated", body = ApiResponse<RouteCallDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the organizer", body = ErrorDto),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_route_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateRouteCallDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let route_call = RouteCallService::new(&state.db)
        .update(id, &user, UpdateRouteCallParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(route_call.into_dto())
                .with_message("Route call updated successfully"),
        ),
    ))
}

/// Cancel a route call.
///
/// # Access Control
/// - Organizer or admin
///
/// # Returns
/// - `200 OK` - Route call now CANCELLED
/// - `400 Bad Request` - Route call completed or already cancelled
/// - `403 Forbidden` - Neither organizer nor admin
/// - `404 Not Found` - Route call does not exist
#[utoipa::path(
    patch,
    path = "/api/route-calls/{id}/cancel",
    tag = ROUTE_CALL_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Route call cancelled", body = ApiResponse<RouteCallDto>),
        (status = 400, description = "Route call cannot be cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_route_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let route_call = RouteCallService::new(&state.db).cancel(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(route_call.into_dto())
                .with_message("Route call cancelled successfully"),
        ),
    ))
}

/// Delete a route call that nobody has signed up for.
///
/// # Access Control
/// - Organizer or admin
///
/// # Returns
/// - `200 OK` - Route call and meeting points deleted
/// - `400 Bad Request` - Route call has attendances
/// - `403 Forbidden` - Neither organizer nor admin
/// - `404 Not Found` - Route call does not exist
#[utoipa::path(
    delete,
    path = "/api/route-calls/{id}",
    tag = ROUTE_CALL_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Route call deleted", body = MessageDto),
        (status = 400, description = "Route call has attendances", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_route_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    RouteCallService::new(&state.db).delete(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Route call deleted successfully")),
    ))
}
