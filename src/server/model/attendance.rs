use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::AttendanceStatus;
use uuid::Uuid;

use crate::{
    model::attendance::{AttendanceDto, MyAttendanceDto},
    server::model::{route_call::RouteCall, user::User},
};

/// Attendance with the attending user.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: Uuid,
    pub route_call_id: Uuid,
    pub user_id: Uuid,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: User,
}

impl Attendance {
    pub fn from_entity(entity: entity::attendance::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            route_call_id: entity.route_call_id,
            user_id: entity.user_id,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: User::from_entity(user),
        }
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            route_call_id: self.route_call_id,
            user_id: self.user_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.into_summary_dto(),
        }
    }
}

/// Attendance of the current user with the route call it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct MyAttendance {
    pub id: Uuid,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub route_call: RouteCall,
}

impl MyAttendance {
    pub fn into_dto(self) -> MyAttendanceDto {
        MyAttendanceDto {
            id: self.id,
            route_call_id: self.route_call.id,
            status: self.status,
            created_at: self.created_at,
            route_call: self.route_call.into_dto(),
        }
    }
}
