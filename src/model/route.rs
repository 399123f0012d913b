use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::sea_orm_active_enums::RouteLevel;

use crate::model::{photo::PhotoDto, review::ReviewDto};

/// Relation counters shown next to a catalog route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCountsDto {
    pub reviews: u64,
    pub favorites: u64,
    pub route_calls: u64,
    pub photos: u64,
}

/// Catalog route with its aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    pub description: String,
    pub map_embed_url: Option<String>,
    pub gpx_file_url: Option<String>,
    #[schema(value_type = Vec<String>, example = json!(["INTERMEDIATE", "ADVANCED"]))]
    pub level: Vec<RouteLevel>,
    pub created_at: DateTime<Utc>,
    /// Mean review rating rounded to one decimal, 0 without reviews.
    pub average_rating: f64,
    #[serde(rename = "_count")]
    pub counts: RouteCountsDto,
}

/// Catalog route with its reviews and most recent active photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteDetailDto {
    #[serde(flatten)]
    pub route: RouteDto,
    pub reviews: Vec<ReviewDto>,
    pub photos: Vec<PhotoDto>,
}

/// Compact route reference embedded in favorites and route calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    #[schema(value_type = Vec<String>)]
    pub level: Vec<RouteLevel>,
    pub map_embed_url: Option<String>,
}
