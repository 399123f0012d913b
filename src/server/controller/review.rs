use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto, PageQuery},
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            page::PageRequest,
            review::{CreateReviewParams, Review, UpdateReviewParams},
        },
        service::review::ReviewService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "reviews";

/// Get a page of reviews for a route, newest first.
///
/// # Arguments
/// - `route_id` - Reviewed route
/// - `query` - `page` (default 1) and `limit` (default 20, at most 100)
///
/// # Returns
/// - `200 OK` - Reviews with pagination metadata
/// - `400 Bad Request` - Invalid pagination values
/// - `404 Not Found` - Route does not exist
#[utoipa::path(
    get,
    path = "/api/routes/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = Uuid, Path, description = "Route ID"), PageQuery),
    responses(
        (status = 200, description = "Page of reviews", body = ApiResponse<Vec<ReviewDto>>),
        (status = 400, description = "Invalid pagination values", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn get_route_reviews(
    State(state): State<AppState>,
    Path(route_id): Path<Uuid>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = ReviewService::new(&state.db)
        .get_by_route(route_id, PageRequest::new(query.page, query.limit))
        .await?;
    let pagination = page.pagination_dto();
    let data: Vec<ReviewDto> = page.items.into_iter().map(Review::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(data).with_pagination(pagination)),
    ))
}

/// Review a route.
///
/// # Access Control
/// - Authenticated user, once per route
///
/// # Returns
/// - `201 Created` - Created review
/// - `400 Bad Request` - Rating outside 1..=5 or comment too long
/// - `404 Not Found` - Route does not exist
/// - `409 Conflict` - User already reviewed the route
#[utoipa::path(
    post,
    path = "/api/routes/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = Uuid, Path, description = "Route ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 409, description = "Route already reviewed", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let params = CreateReviewParams::from_dto(route_id, user.id, payload);
    let review = ReviewService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(review.into_dto()).with_message("Review created successfully")),
    ))
}

/// Update one's own review. Absent fields are left unchanged.
///
/// # Access Control
/// - Review author
///
/// # Returns
/// - `200 OK` - Updated review
/// - `403 Forbidden` - Review belongs to someone else
/// - `404 Not Found` - Review does not exist
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = Uuid, Path, description = "Review ID")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewDto>),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .update(id, &user, UpdateReviewParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(review.into_dto()).with_message("Review updated successfully")),
    ))
}

/// Delete a review.
///
/// # Access Control
/// - Review author or admin
///
/// # Returns
/// - `200 OK` - Review deleted
/// - `403 Forbidden` - Neither author nor admin
/// - `404 Not Found` - Review does not exist
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = Uuid, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    ReviewService::new(&state.db).delete(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Review deleted successfully")),
    ))
}
