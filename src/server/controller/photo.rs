use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        photo::{
            CoverPhotoForm, PhotoDto, PhotoQuery, RejectPhotoDto, RouteCallGalleryDto,
            RouteGalleryDto, UploadPhotoForm,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            page::PageRequest,
            photo::{Photo, PhotoFilter, PhotoTarget},
        },
        service::photo::PhotoService,
        state::AppState,
        util::{
            extract::{ValidatedJson, ValidatedQuery},
            upload::PhotoUploadForm,
        },
    },
};

/// Tag for grouping photo endpoints in OpenAPI documentation
pub static PHOTO_TAG: &str = "photos";

/// Upload a photo.
///
/// Photos are published immediately and reviewed by an admin afterwards.
///
/// # Access Control
/// - `ROUTE_GALLERY` - Any authenticated user
/// - `ROUTE_CALL_COVER` - Organizer of the route call
/// - `ROUTE_CALL_GALLERY` - Confirmed attendees of the route call
///
/// # Returns
/// - `201 Created` - Stored photo
/// - `400 Bad Request` - Missing file, bad file or inconsistent target
/// - `403 Forbidden` - Not allowed to upload in this context
/// - `404 Not Found` - Route or route call does not exist
#[utoipa::path(
    post,
    path = "/api/photos",
    tag = PHOTO_TAG,
    request_body(content = UploadPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Photo uploaded", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Upload not allowed", body = ErrorDto),
        (status = 404, description = "Route or route call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let mut form = PhotoUploadForm::read(multipart).await?;
    let file = form.take_file()?;
    let target = PhotoTarget {
        context: form.photo_context()?,
        route_id: form.route_id()?,
        route_call_id: form.route_call_id()?,
    };

    let photo = PhotoService::new(&state.db, state.storage.as_ref())
        .upload(user.id, target, form.caption.take(), file)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(photo.into_dto()).with_message("Photo uploaded successfully")),
    ))
}

/// Replace the cover photo of a route call.
///
/// # Access Control
/// - Organizer of the route call
#[utoipa::path(
    patch,
    path = "/api/photos/route-calls/{id}/cover-photo",
    tag = PHOTO_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    request_body(content = CoverPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Cover photo updated", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the organizer", body = ErrorDto),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_cover_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let file = PhotoUploadForm::read(multipart).await?.take_file()?;
    let photo = PhotoService::new(&state.db, state.storage.as_ref())
        .update_cover(id, user.id, file)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(photo.into_dto()).with_message("Cover photo updated successfully"),
        ),
    ))
}

/// List photos, newest first. Only ACTIVE photos unless another status is requested.
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = PHOTO_TAG,
    params(PhotoQuery),
    responses(
        (status = 200, description = "Page of photos", body = ApiResponse<Vec<PhotoDto>>),
        (status = 400, description = "Invalid query", body = ErrorDto)
    ),
)]
pub async fn get_photos(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PhotoQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = PhotoFilter::from_query(&query);
    let request = PageRequest::new(query.page, query.limit);

    let page = PhotoService::new(&state.db, state.storage.as_ref())
        .list(filter, request)
        .await?;
    let pagination = page.pagination_dto();
    let data: Vec<PhotoDto> = page.items.into_iter().map(Photo::into_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(data).with_pagination(pagination)),
    ))
}

/// Get the public gallery of a catalog route.
#[utoipa::path(
    get,
    path = "/api/photos/routes/{slug}/gallery",
    tag = PHOTO_TAG,
    params(("slug" = String, Path, description = "Route slug")),
    responses(
        (status = 200, description = "Route gallery", body = ApiResponse<RouteGalleryDto>),
        (status = 404, description = "Route not found", body = ErrorDto)
    ),
)]
pub async fn get_route_gallery(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let gallery = PhotoService::new(&state.db, state.storage.as_ref())
        .route_gallery(&slug)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(gallery.into_dto()))))
}

/// Get the public gallery of a route call.
#[utoipa::path(
    get,
    path = "/api/photos/route-calls/{id}/gallery",
    tag = PHOTO_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Route call gallery", body = ApiResponse<RouteCallGalleryDto>),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
)]
pub async fn get_route_call_gallery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let gallery = PhotoService::new(&state.db, state.storage.as_ref())
        .route_call_gallery(id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(gallery.into_dto()))))
}

/// Get the user's own photos in every status but DELETED.
#[utoipa::path(
    get,
    path = "/api/photos/my-photos",
    tag = PHOTO_TAG,
    responses(
        (status = 200, description = "User's photos", body = ApiResponse<Vec<PhotoDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_photos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let photos = PhotoService::new(&state.db, state.storage.as_ref())
        .my_photos(user.id)
        .await?;
    let count = photos.len();
    let data: Vec<PhotoDto> = photos.into_iter().map(Photo::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}

/// Get ACTIVE photos waiting for moderation, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/photos/pending-review",
    tag = PHOTO_TAG,
    responses(
        (status = 200, description = "Photos pending review", body = ApiResponse<Vec<PhotoDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_photos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::from_state(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let photos = PhotoService::new(&state.db, state.storage.as_ref())
        .pending_review()
        .await?;
    let count = photos.len();
    let data: Vec<PhotoDto> = photos.into_iter().map(Photo::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}

/// Approve a photo, recording the moderator.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/photos/{id}/approve",
    tag = PHOTO_TAG,
    params(("id" = Uuid, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo approved", body = ApiResponse<PhotoDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::from_state(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let photo = PhotoService::new(&state.db, state.storage.as_ref())
        .approve(id, &admin)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(photo.into_dto()).with_message("Photo approved successfully")),
    ))
}

/// Reject a photo, hiding it from galleries.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/photos/{id}/reject",
    tag = PHOTO_TAG,
    params(("id" = Uuid, Path, description = "Photo ID")),
    request_body = RejectPhotoDto,
    responses(
        (status = 200, description = "Photo rejected", body = ApiResponse<PhotoDto>),
        (status = 400, description = "Photo already deleted", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn reject_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<RejectPhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::from_state(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let photo = PhotoService::new(&state.db, state.storage.as_ref())
        .reject(id, &admin, payload.moderation_notes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(photo.into_dto()).with_message("Photo rejected successfully")),
    ))
}

/// Delete a photo and its stored file.
///
/// # Access Control
/// - Uploader or admin
#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = Uuid, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    PhotoService::new(&state.db, state.storage.as_ref())
        .delete(id, &user)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Photo deleted successfully"))))
}
