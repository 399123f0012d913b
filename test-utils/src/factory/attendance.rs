//! Attendance factory.

use chrono::Utc;
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating attendance records. Defaults to CONFIRMED.
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    route_call_id: Uuid,
    user_id: Uuid,
    status: AttendanceStatus,
}

impl<'a> AttendanceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, route_call_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            route_call_id,
            user_id,
            status: AttendanceStatus::Confirmed,
        }
    }

    pub fn status(mut self, status: AttendanceStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        let now = Utc::now();
        entity::attendance::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            route_call_id: ActiveValue::Set(self.route_call_id),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a CONFIRMED attendance of a user to a route call.
pub async fn create_attendance(
    db: &DatabaseConnection,
    route_call_id: Uuid,
    user_id: Uuid,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, route_call_id, user_id)
        .build()
        .await
}
