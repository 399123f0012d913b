//! Route call request and response bodies.
//!
//! Request bodies carry their own validation rules; the cross-field rules (route source,
//! meeting point types, future dates, Google Maps locations) are plain functions so they can
//! be unit tested without going through an HTTP extractor.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use entity::sea_orm_active_enums::{MeetingPointType, RouteCallStatus, RouteLevel, RoutePace};

use crate::model::{attendance::AttendanceDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPointDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "PRIMARY")]
    pub point_type: MeetingPointType,
    pub name: String,
    pub custom_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

/// Catalog route embedded in a route call. Description and map link are only filled on the
/// detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCallRouteDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    #[schema(value_type = Vec<String>)]
    pub level: Vec<RouteLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCallCountsDto {
    /// Confirmed attendances only.
    pub attendances: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCallDto {
    pub id: Uuid,
    pub route_id: Option<Uuid>,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub date_route: DateTime<Utc>,
    #[schema(value_type = String, example = "GUSANO")]
    pub pace: RoutePace,
    #[schema(value_type = String, example = "SCHEDULED")]
    pub status: RouteCallStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub route: Option<RouteCallRouteDto>,
    pub organizer: UserSummaryDto,
    pub meeting_points: Vec<MeetingPointDto>,
    /// Confirmed attendances, only on the detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendances: Option<Vec<AttendanceDto>>,
    #[serde(rename = "_count")]
    pub counts: RouteCallCountsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingPointDto {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "PRIMARY")]
    pub point_type: MeetingPointType,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub custom_name: Option<String>,
    #[validate(custom = "validate_google_maps_url")]
    pub location: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_route_source"))]
pub struct CreateRouteCallDto {
    pub route_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200, message = "Custom route name must be 1 to 200 characters"))]
    pub custom_route_name: Option<String>,
    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub image: Option<String>,
    #[validate(custom = "validate_future_date")]
    pub date_route: DateTime<Utc>,
    #[schema(value_type = String, example = "GUSANO")]
    pub pace: RoutePace,
    #[validate]
    #[validate(
        length(min = 1, max = 2, message = "A route call needs one or two meeting points"),
        custom = "validate_meeting_point_types"
    )]
    pub meeting_points: Vec<CreateMeetingPointDto>,
}

/// Partial update; meeting points are not editable after creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteCallDto {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub image: Option<String>,
    #[validate(custom = "validate_future_date")]
    pub date_route: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub pace: Option<RoutePace>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RouteCallQuery {
    #[param(value_type = Option<String>)]
    pub status: Option<RouteCallStatus>,
    pub organizer_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    /// `true` for upcoming calls, `false` for past or closed ones.
    pub upcoming: Option<bool>,
    #[validate(range(min = 1, max = 10000, message = "Page must be between 1 and 10000"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u64>,
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Accepts only links pointing at Google Maps.
pub fn validate_google_maps_url(location: &str) -> Result<(), ValidationError> {
    if is_google_maps_url(location) {
        Ok(())
    } else {
        Err(error("google_maps_url", "Location must be a Google Maps URL"))
    }
}

fn is_google_maps_url(location: &str) -> bool {
    let Ok(url) = Url::parse(location) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    let maps_path = url.path().starts_with("/maps");

    host.starts_with("maps.google.")
        || host == "maps.app.goo.gl"
        || (host == "goo.gl" && maps_path)
        || (host.starts_with("google.") && maps_path)
}

pub fn validate_future_date(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date > Utc::now() {
        Ok(())
    } else {
        Err(error("future_date", "Date must be in the future"))
    }
}

/// Exactly one PRIMARY and at most one SECONDARY meeting point.
pub fn validate_meeting_point_types(
    points: &Vec<CreateMeetingPointDto>,
) -> Result<(), ValidationError> {
    let primary = points
        .iter()
        .filter(|p| p.point_type == MeetingPointType::Primary)
        .count();
    let secondary = points.len() - primary;

    match (primary, secondary) {
        (0, _) => Err(error(
            "meeting_point_types",
            "At least one PRIMARY meeting point is required",
        )),
        (p, _) if p > 1 => Err(error(
            "meeting_point_types",
            "Only one PRIMARY meeting point is allowed",
        )),
        (_, s) if s > 1 => Err(error(
            "meeting_point_types",
            "Only one SECONDARY meeting point is allowed",
        )),
        _ => Ok(()),
    }
}

/// A route call targets either a catalog route or a custom route name, never both.
pub fn validate_route_source(dto: &CreateRouteCallDto) -> Result<(), ValidationError> {
    match (&dto.route_id, &dto.custom_route_name) {
        (None, None) => Err(error(
            "route_source",
            "Either routeId or customRouteName must be provided",
        )),
        (Some(_), Some(_)) => Err(error(
            "route_source",
            "Cannot provide both routeId and customRouteName",
        )),
        _ => Ok(()),
    }
}
