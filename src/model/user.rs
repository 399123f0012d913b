use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::sea_orm_active_enums::UserRole;

/// Public identity embedded in reviews, attendances, route calls and photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

/// The authenticated user as mirrored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub clerk_id: String,
    pub email: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    #[schema(value_type = String, example = "USER")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}
