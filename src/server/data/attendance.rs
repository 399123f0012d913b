//! Route call attendance repository.

use chrono::Utc;
use entity::sea_orm_active_enums::AttendanceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::{require_related, route_call::RouteCallRepository},
    model::attendance::{Attendance, MyAttendance},
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the attendance row of a user for a route call, whatever its status.
    pub async fn find(
        &self,
        route_call_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::RouteCallId.eq(route_call_id))
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts a CONFIRMED attendance.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Created attendance with user
    /// - `Err(DbErr)` - Database error, including a unique violation when a row already exists
    pub async fn create(&self, route_call_id: Uuid, user_id: Uuid) -> Result<Attendance, DbErr> {
        let now = Utc::now();
        let attendance = entity::attendance::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            route_call_id: ActiveValue::Set(route_call_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(AttendanceStatus::Confirmed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.get_by_id(attendance.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Attendance {} not found after creation", attendance.id))
        })
    }

    /// Updates the status of an attendance row.
    pub async fn set_status(&self, id: Uuid, status: AttendanceStatus) -> Result<Attendance, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Attendance {} not found", id)))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Attendance>, DbErr> {
        let Some((attendance, user)) = entity::prelude::Attendance::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = require_related(user, "User", attendance.id)?;
        Ok(Some(Attendance::from_entity(attendance, user)))
    }

    /// Gets the CONFIRMED attendances of a route call with users, oldest first.
    pub async fn get_confirmed_by_route_call(
        &self,
        route_call_id: Uuid,
    ) -> Result<Vec<Attendance>, DbErr> {
        let rows = entity::prelude::Attendance::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::attendance::Column::RouteCallId.eq(route_call_id))
            .filter(entity::attendance::Column::Status.eq(AttendanceStatus::Confirmed))
            .order_by_asc(entity::attendance::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(attendance, user)| {
                let user = require_related(user, "User", attendance.id)?;
                Ok(Attendance::from_entity(attendance, user))
            })
            .collect()
    }

    /// Counts attendance rows of a route call regardless of status.
    pub async fn count_by_route_call(&self, route_call_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::RouteCallId.eq(route_call_id))
            .count(self.db)
            .await
    }

    /// Checks whether a user holds a CONFIRMED attendance for a route call.
    pub async fn is_confirmed(&self, route_call_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::RouteCallId.eq(route_call_id))
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .filter(entity::attendance::Column::Status.eq(AttendanceStatus::Confirmed))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's CONFIRMED attendances with their route calls, by route call date ascending.
    pub async fn get_confirmed_by_user(&self, user_id: Uuid) -> Result<Vec<MyAttendance>, DbErr> {
        let rows = entity::prelude::Attendance::find()
            .find_also_related(entity::prelude::RouteCall)
            .filter(entity::attendance::Column::UserId.eq(user_id))
            .filter(entity::attendance::Column::Status.eq(AttendanceStatus::Confirmed))
            .order_by_asc(entity::route_call::Column::DateRoute)
            .all(self.db)
            .await?;

        let mut attendances = Vec::with_capacity(rows.len());
        let mut route_calls = Vec::with_capacity(rows.len());
        for (attendance, route_call) in rows {
            route_calls.push(require_related(route_call, "Route call", attendance.id)?);
            attendances.push(attendance);
        }

        let route_calls = RouteCallRepository::new(self.db)
            .with_relations(route_calls)
            .await?;

        Ok(attendances
            .into_iter()
            .zip(route_calls)
            .map(|(attendance, route_call)| MyAttendance {
                id: attendance.id,
                status: attendance.status,
                created_at: attendance.created_at,
                route_call,
            })
            .collect())
    }
}
