use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use entity::sea_orm_active_enums::AttendanceStatus;

use crate::model::{route_call::RouteCallDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: Uuid,
    pub route_call_id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String, example = "CONFIRMED")]
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
}

/// Attendance of the current user together with the route call it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyAttendanceDto {
    pub id: Uuid,
    pub route_call_id: Uuid,
    #[schema(value_type = String, example = "CONFIRMED")]
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub route_call: RouteCallDto,
}
