use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub id: Uuid,
    #[schema(value_type = String, example = "ROUTE_GALLERY")]
    pub context: PhotoContext,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    #[schema(value_type = String, example = "ACTIVE")]
    pub status: PhotoStatus,
    pub moderated_by: Option<Uuid>,
    pub moderated_at: Option<DateTime<Utc>>,
    pub moderation_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
    /// Only filled when listing the current user's photos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<UserSummaryDto>,
}

/// Multipart form accepted by `POST /api/photos`. Documentation only; the handler reads the
/// parts itself.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadPhotoForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    #[schema(value_type = String, example = "ROUTE_GALLERY")]
    pub context: String,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub caption: Option<String>,
}

/// Multipart form accepted by the cover photo endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CoverPhotoForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PhotoQuery {
    #[param(value_type = Option<String>)]
    pub context: Option<PhotoContext>,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    /// Defaults to ACTIVE.
    #[param(value_type = Option<String>)]
    pub status: Option<PhotoStatus>,
    #[validate(range(min = 1, max = 10000, message = "Page must be between 1 and 10000"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectPhotoDto {
    #[validate(length(max = 500, message = "Moderation notes must be at most 500 characters"))]
    pub moderation_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryOwnerDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteGalleryDto {
    pub route: GalleryOwnerDto,
    pub photos: Vec<PhotoDto>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCallGalleryDto {
    pub route_call: GalleryOwnerDto,
    pub photos: Vec<PhotoDto>,
    pub count: u64,
}
