//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::{
    model::api::{ErrorDetailDto, ErrorDto},
    server::error::{auth::AuthError, config::ConfigError, storage::StorageError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations map to 409/400, missing records to 404, everything else to a
    /// logged 500.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Object storage error while uploading photos.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Request body or query failed validation.
    ///
    /// Results in 400 Bad Request with one `{field, message}` entry per failed rule.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Authenticated user is not allowed to touch the resource.
    #[error("{0}")]
    Forbidden(String),

    /// Request conflicts with existing state, such as a duplicate review.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `Validation` and foreign key violations
/// - 403 Forbidden - For `Forbidden`
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(ErrorDto::new(msg))).into_response(),
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::Validation(errors) => {
                let body = ErrorDto {
                    details: Some(validation_details(&errors)),
                    ..ErrorDto::new("Validation failed")
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::DbErr(err) => db_error_response(err),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_server_error()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn db_error_response(err: DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violation: {}", detail);
            (
                StatusCode::CONFLICT,
                Json(ErrorDto::new("A record with this value already exists")),
            )
                .into_response()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key violation: {}", detail);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("Invalid reference to related record")),
            )
                .into_response()
        }
        _ => match err {
            DbErr::RecordNotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new("Record not found"))).into_response()
            }
            err => InternalServerError(err).into_response(),
        },
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new("Internal server error")),
    )
        .into_response()
}

/// Flattens nested validation errors into `{field, message}` pairs.
///
/// Field paths use the camelCase names of the JSON body, with list indices in brackets
/// (`meetingPoints[0].location`). Struct-level rules report the path of the struct itself,
/// or `body` at the top level.
pub fn validation_details(errors: &ValidationErrors) -> Vec<ErrorDetailDto> {
    let mut details = Vec::new();
    collect_details(errors, "", &mut details);
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

fn collect_details(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ErrorDetailDto>) {
    for (field, kind) in errors.errors() {
        let path = if *field == "__all__" {
            if prefix.is_empty() {
                "body".to_string()
            } else {
                prefix.to_string()
            }
        } else if prefix.is_empty() {
            camel_case(field)
        } else {
            format!("{}.{}", prefix, camel_case(field))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                    out.push(ErrorDetailDto {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_details(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_details(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_server_error()
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::model::review::CreateReviewDto;

    #[test]
    fn converts_snake_case_fields() {
        assert_eq!(camel_case("date_route"), "dateRoute");
        assert_eq!(camel_case("rating"), "rating");
        assert_eq!(camel_case("meeting_points"), "meetingPoints");
    }

    #[test]
    fn flattens_field_errors() {
        let dto = CreateReviewDto {
            rating: 9,
            comment: Some("x".repeat(501)),
        };
        let errors = dto.validate().unwrap_err();

        let details = validation_details(&errors);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].field, "comment");
        assert_eq!(details[1].field, "rating");
        assert_eq!(details[1].message, "Rating must be between 1 and 5");
    }

    #[test]
    fn maps_status_codes() {
        let cases = [
            (AppError::NotFound("Route not found".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Forbidden("no".into()), StatusCode::FORBIDDEN),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (AppError::AuthErr(AuthError::MissingToken), StatusCode::UNAUTHORIZED),
            (AppError::AuthErr(AuthError::AdminRequired), StatusCode::FORBIDDEN),
            (
                AppError::DbErr(DbErr::RecordNotFound("gone".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::DbErr(DbErr::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::InternalError("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
