use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::sea_orm_active_enums::RouteLevel;

/// Favorite as returned right after it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub route: FavoriteRouteDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRouteDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    #[schema(value_type = Vec<String>)]
    pub level: Vec<RouteLevel>,
    /// Only present when listing the user's favorites.
    #[serde(rename = "_count", skip_serializing_if = "Option::is_none")]
    pub counts: Option<FavoriteRouteCountsDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRouteCountsDto {
    pub reviews: u64,
    pub route_calls: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusDto {
    pub is_favorite: bool,
}
