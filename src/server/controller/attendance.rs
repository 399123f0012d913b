use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        attendance::{AttendanceDto, MyAttendanceDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::attendance::{Attendance, MyAttendance},
        service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendances";

/// Confirm attendance to a route call.
///
/// A previously cancelled attendance is confirmed again.
///
/// # Returns
/// - `201 Created` - CONFIRMED attendance
/// - `400 Bad Request` - Route call cancelled or completed
/// - `404 Not Found` - Route call does not exist
/// - `409 Conflict` - Already attending
#[utoipa::path(
    post,
    path = "/api/route-calls/{id}/attendances",
    tag = ATTENDANCE_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 201, description = "Attendance confirmed", body = ApiResponse<AttendanceDto>),
        (status = 400, description = "Route call closed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Route call not found", body = ErrorDto),
        (status = 409, description = "Already attending", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn attend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_call_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let attendance = AttendanceService::new(&state.db)
        .attend(route_call_id, user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::new(attendance.into_dto())
                .with_message("Attendance confirmed successfully"),
        ),
    ))
}

/// Cancel one's attendance to a route call.
#[utoipa::path(
    delete,
    path = "/api/route-calls/{id}/attendances",
    tag = ATTENDANCE_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Attendance cancelled", body = ApiResponse<AttendanceDto>),
        (status = 400, description = "Attendance already cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(route_call_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let attendance = AttendanceService::new(&state.db)
        .cancel(route_call_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(attendance.into_dto())
                .with_message("Attendance cancelled successfully"),
        ),
    ))
}

/// List confirmed attendees of a route call, earliest sign-up first.
#[utoipa::path(
    get,
    path = "/api/route-calls/{id}/attendances",
    tag = ATTENDANCE_TAG,
    params(("id" = Uuid, Path, description = "Route call ID")),
    responses(
        (status = 200, description = "Confirmed attendances", body = ApiResponse<Vec<AttendanceDto>>),
        (status = 404, description = "Route call not found", body = ErrorDto)
    ),
)]
pub async fn get_route_call_attendances(
    State(state): State<AppState>,
    Path(route_call_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let attendances = AttendanceService::new(&state.db)
        .get_by_route_call(route_call_id)
        .await?;
    let count = attendances.len();
    let data: Vec<AttendanceDto> = attendances.into_iter().map(Attendance::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}

/// List the route calls the user confirmed, by route call date.
#[utoipa::path(
    get,
    path = "/api/attendances/my-attendances",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Confirmed attendances", body = ApiResponse<Vec<MyAttendanceDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_attendances(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::from_state(&state, &headers).require(&[]).await?;

    let attendances = AttendanceService::new(&state.db).get_mine(user.id).await?;
    let count = attendances.len();
    let data: Vec<MyAttendanceDto> = attendances
        .into_iter()
        .map(MyAttendance::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(data).with_count(count))))
}
