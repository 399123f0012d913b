use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("No authentication token provided")]
    MissingToken,

    /// Bearer token failed signature, expiry or claim checks.
    ///
    /// # Fields
    /// - Reason reported by the token verifier, logged at debug level only
    #[error("Invalid authentication token: {0}")]
    InvalidToken(String),

    /// Token was valid but the identity could not be mirrored into the local user table.
    ///
    /// # Fields
    /// - Description of the underlying identity provider or database failure
    #[error("Failed to sync authenticated user: {0}")]
    SyncFailed(String),

    /// Authenticated user lacks the ADMIN role.
    #[error("Admin access required")]
    AdminRequired,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 "No authentication token provided"
/// - `InvalidToken` → 401 "Invalid authentication token"
/// - `SyncFailed` → 401 "Authentication failed"
/// - `AdminRequired` → 403 "Admin access required"
///
/// Token and sync failures are logged server-side while the client only receives the
/// generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "No authentication token provided"),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected bearer token: {}", reason);
                (StatusCode::UNAUTHORIZED, "Invalid authentication token")
            }
            Self::SyncFailed(reason) => {
                tracing::error!("Authentication error: {}", reason);
                (StatusCode::UNAUTHORIZED, "Authentication failed")
            }
            Self::AdminRequired => (StatusCode::FORBIDDEN, "Admin access required"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
