use entity::sea_orm_active_enums::{AttendanceStatus, RouteCallStatus};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{attendance::AttendanceRepository, route_call::RouteCallRepository},
    error::AppError,
    model::attendance::{Attendance, MyAttendance},
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Confirms attendance to a route call.
    ///
    /// A previously cancelled attendance is reactivated instead of inserting a second row.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - CONFIRMED attendance
    /// - `Err(AppError::NotFound)` - Route call does not exist
    /// - `Err(AppError::BadRequest)` - Route call is cancelled or completed
    /// - `Err(AppError::Conflict)` - User already attends
    pub async fn attend(&self, route_call_id: Uuid, user_id: Uuid) -> Result<Attendance, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let route_call = RouteCallRepository::new(self.db)
            .find_by_id(route_call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

        match route_call.status {
            RouteCallStatus::Cancelled => {
                return Err(AppError::BadRequest(
                    "Cannot attend a cancelled route call".to_string(),
                ))
            }
            RouteCallStatus::Completed => {
                return Err(AppError::BadRequest(
                    "Cannot attend a completed route call".to_string(),
                ))
            }
            RouteCallStatus::Scheduled | RouteCallStatus::Ongoing => {}
        }

        let attendance = match repo.find(route_call_id, user_id).await? {
            Some(existing) if existing.status == AttendanceStatus::Confirmed => {
                return Err(AppError::Conflict(
                    "You are already attending this route call".to_string(),
                ))
            }
            Some(existing) => {
                repo.set_status(existing.id, AttendanceStatus::Confirmed)
                    .await?
            }
            None => repo.create(route_call_id, user_id).await?,
        };

        Ok(attendance)
    }

    /// Cancels the user's attendance to a route call.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Attendance now CANCELLED
    /// - `Err(AppError::NotFound)` - User never attended
    /// - `Err(AppError::BadRequest)` - Attendance already cancelled
    pub async fn cancel(&self, route_call_id: Uuid, user_id: Uuid) -> Result<Attendance, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let attendance = repo
            .find(route_call_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Attendance not found".to_string()))?;

        if attendance.status == AttendanceStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Attendance is already cancelled".to_string(),
            ));
        }

        Ok(repo
            .set_status(attendance.id, AttendanceStatus::Cancelled)
            .await?)
    }

    /// Lists confirmed attendances of a route call, oldest first.
    pub async fn get_by_route_call(&self, route_call_id: Uuid) -> Result<Vec<Attendance>, AppError> {
        if RouteCallRepository::new(self.db)
            .find_by_id(route_call_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Route call not found".to_string()));
        }

        Ok(AttendanceRepository::new(self.db)
            .get_confirmed_by_route_call(route_call_id)
            .await?)
    }

    /// Lists the user's confirmed attendances by route call date ascending.
    pub async fn get_mine(&self, user_id: Uuid) -> Result<Vec<MyAttendance>, AppError> {
        Ok(AttendanceRepository::new(self.db)
            .get_confirmed_by_user(user_id)
            .await?)
    }
}
