//! Route call domain models and parameters.
//!
//! A route call is a scheduled outing either on a catalog route or on a custom route named
//! by its organizer. It owns one PRIMARY and at most one SECONDARY meeting point and collects
//! attendances until it is cancelled or completed.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{MeetingPointType, RouteCallStatus, RoutePace};
use uuid::Uuid;

use crate::{
    model::route_call::{
        CreateMeetingPointDto, CreateRouteCallDto, MeetingPointDto, RouteCallCountsDto,
        RouteCallDto, RouteCallQuery, UpdateRouteCallDto,
    },
    server::model::{attendance::Attendance, route::Route, user::User},
};

/// Cover image used for custom routes created without an image.
pub const DEFAULT_ROUTE_CALL_IMAGE: &str =
    "https://images.unsplash.com/photo-1564783436897-4c044a6d9c56?w=800";

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingPoint {
    pub id: Uuid,
    pub point_type: MeetingPointType,
    pub name: String,
    pub custom_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

impl MeetingPoint {
    pub fn from_entity(entity: entity::meeting_point::Model) -> Self {
        Self {
            id: entity.id,
            point_type: entity.point_type,
            name: entity.name,
            custom_name: entity.custom_name,
            location: entity.location,
            time: entity.time,
        }
    }

    pub fn into_dto(self) -> MeetingPointDto {
        MeetingPointDto {
            id: self.id,
            point_type: self.point_type,
            name: self.name,
            custom_name: self.custom_name,
            location: self.location,
            time: self.time,
        }
    }
}

/// Route call with organizer, route, meeting points and confirmed attendance count.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCall {
    pub id: Uuid,
    pub route_id: Option<Uuid>,
    pub organizer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub date_route: DateTime<Utc>,
    pub pace: RoutePace,
    pub status: RouteCallStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub route: Option<Route>,
    pub organizer: User,
    /// PRIMARY first.
    pub meeting_points: Vec<MeetingPoint>,
    pub confirmed_attendances: u64,
}

impl RouteCall {
    /// Assembles a route call from its entity and already loaded relations.
    ///
    /// Meeting points are sorted so the PRIMARY one comes first.
    pub fn from_entity(
        entity: entity::route_call::Model,
        route: Option<entity::route::Model>,
        organizer: entity::user::Model,
        meeting_points: Vec<entity::meeting_point::Model>,
        confirmed_attendances: u64,
    ) -> Self {
        let mut meeting_points: Vec<MeetingPoint> = meeting_points
            .into_iter()
            .map(MeetingPoint::from_entity)
            .collect();
        meeting_points.sort_by_key(|p| p.point_type);

        Self {
            id: entity.id,
            route_id: entity.route_id,
            organizer_id: entity.organizer_id,
            title: entity.title,
            description: entity.description,
            image: entity.image,
            date_route: entity.date_route,
            pace: entity.pace,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            route: route.map(Route::from_entity),
            organizer: User::from_entity(organizer),
            meeting_points,
            confirmed_attendances,
        }
    }

    /// Converts to the listing representation.
    pub fn into_dto(self) -> RouteCallDto {
        self.into_dto_with(false, None)
    }

    /// Converts to the detail representation with route description, organizer last name
    /// and the confirmed attendances.
    pub fn into_detail_dto(self, attendances: Vec<Attendance>) -> RouteCallDto {
        self.into_dto_with(true, Some(attendances))
    }

    fn into_dto_with(self, detailed: bool, attendances: Option<Vec<Attendance>>) -> RouteCallDto {
        RouteCallDto {
            id: self.id,
            route_id: self.route_id,
            organizer_id: self.organizer_id,
            title: self.title,
            description: self.description,
            image: self.image,
            date_route: self.date_route,
            pace: self.pace,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            route: self.route.map(|r| r.into_route_call_dto(detailed)),
            organizer: if detailed {
                self.organizer.into_full_summary_dto()
            } else {
                self.organizer.into_summary_dto()
            },
            meeting_points: self
                .meeting_points
                .into_iter()
                .map(MeetingPoint::into_dto)
                .collect(),
            attendances: attendances
                .map(|list| list.into_iter().map(Attendance::into_dto).collect()),
            counts: RouteCallCountsDto {
                attendances: self.confirmed_attendances,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMeetingPointParams {
    pub point_type: MeetingPointType,
    pub name: String,
    pub custom_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

impl CreateMeetingPointParams {
    pub fn from_dto(dto: CreateMeetingPointDto) -> Self {
        Self {
            point_type: dto.point_type,
            name: dto.name,
            custom_name: dto.custom_name,
            location: dto.location,
            time: dto.time,
        }
    }
}

/// Where a new route call takes its route from.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteSource {
    /// A catalog route, referenced by id.
    Catalog(Uuid),
    /// A custom route; the name becomes the route call title.
    Custom(String),
}

/// Request to schedule a route call, before the route source is resolved.
#[derive(Debug, Clone)]
pub struct CreateRouteCallParams {
    pub organizer_id: Uuid,
    pub source: RouteSource,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date_route: DateTime<Utc>,
    pub pace: RoutePace,
    pub meeting_points: Vec<CreateMeetingPointParams>,
}

impl CreateRouteCallParams {
    /// Converts a validated request body. Returns `None` when neither a route id nor a custom
    /// name is present.
    pub fn from_dto(organizer_id: Uuid, dto: CreateRouteCallDto) -> Option<Self> {
        let source = match (dto.route_id, dto.custom_route_name) {
            (Some(route_id), _) => RouteSource::Catalog(route_id),
            (None, Some(name)) => RouteSource::Custom(name),
            (None, None) => return None,
        };

        Some(Self {
            organizer_id,
            source,
            description: dto.description,
            image: dto.image,
            date_route: dto.date_route,
            pace: dto.pace,
            meeting_points: dto
                .meeting_points
                .into_iter()
                .map(CreateMeetingPointParams::from_dto)
                .collect(),
        })
    }
}

/// Fully resolved route call ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewRouteCall {
    pub organizer_id: Uuid,
    pub route_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub date_route: DateTime<Utc>,
    pub pace: RoutePace,
    pub meeting_points: Vec<CreateMeetingPointParams>,
}

/// Partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRouteCallParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub date_route: Option<DateTime<Utc>>,
    pub pace: Option<RoutePace>,
}

impl UpdateRouteCallParams {
    pub fn from_dto(dto: UpdateRouteCallDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            image: dto.image,
            date_route: dto.date_route,
            pace: dto.pace,
        }
    }
}

/// Filters for the route call listing.
#[derive(Debug, Clone, Default)]
pub struct RouteCallFilter {
    pub status: Option<RouteCallStatus>,
    pub organizer_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    /// `Some(true)` upcoming only, `Some(false)` past or closed only.
    pub upcoming: Option<bool>,
}

impl RouteCallFilter {
    pub fn from_query(query: &RouteCallQuery) -> Self {
        Self {
            status: query.status,
            organizer_id: query.organizer_id,
            route_id: query.route_id,
            upcoming: query.upcoming,
        }
    }
}
