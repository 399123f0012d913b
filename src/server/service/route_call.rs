//! Route call scheduling and lifecycle.
//!
//! Lifecycle rules enforced here:
//! - only the organizer edits a route call
//! - the organizer or an admin cancels or deletes it
//! - completed or already cancelled calls cannot be cancelled
//! - calls with attendance rows cannot be deleted, only cancelled

use entity::sea_orm_active_enums::RouteCallStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        attendance::AttendanceRepository, route::RouteRepository, route_call::RouteCallRepository,
    },
    error::AppError,
    model::{
        attendance::Attendance,
        page::{Page, PageRequest},
        route_call::{
            CreateRouteCallParams, NewRouteCall, RouteCall, RouteCallFilter, RouteSource,
            UpdateRouteCallParams, DEFAULT_ROUTE_CALL_IMAGE,
        },
        user::User,
    },
};

pub struct RouteCallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteCallService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a route call.
    ///
    /// Catalog routes lend their name as title and their image when none is given. Custom
    /// routes use the custom name as title and a default image.
    ///
    /// # Returns
    /// - `Ok(RouteCall)` - Created route call, SCHEDULED
    /// - `Err(AppError::NotFound)` - Referenced catalog route does not exist
    /// - `Err(AppError::BadRequest)` - Custom route name is blank
    pub async fn create(&self, params: CreateRouteCallParams) -> Result<RouteCall, AppError> {
        let (route_id, title, default_image) = match params.source {
            RouteSource::Catalog(route_id) => {
                let route = RouteRepository::new(self.db)
                    .find_by_id(route_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;
                (Some(route.id), route.name, route.image)
            }
            RouteSource::Custom(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(AppError::BadRequest(
                        "Title is required for custom routes".to_string(),
                    ));
                }
                (None, name, DEFAULT_ROUTE_CALL_IMAGE.to_string())
            }
        };

        let new_route_call = NewRouteCall {
            organizer_id: params.organizer_id,
            route_id,
            title,
            description: params.description,
            image: params.image.unwrap_or(default_image),
            date_route: params.date_route,
            pace: params.pace,
            meeting_points: params.meeting_points,
        };

        let route_call = RouteCallRepository::new(self.db)
            .create(new_route_call)
            .await?;
        tracing::info!(
            "Route call {} scheduled by {} for {}",
            route_call.id,
            route_call.organizer_id,
            route_call.date_route
        );

        Ok(route_call)
    }

    pub async fn get_paginated(
        &self,
        filter: RouteCallFilter,
        request: PageRequest,
    ) -> Result<Page<RouteCall>, AppError> {
        Ok(RouteCallRepository::new(self.db)
            .get_paginated(filter, request)
            .await?)
    }

    /// Gets a route call with its confirmed attendances.
    ///
    /// # Returns
    /// - `Ok((RouteCall, Vec<Attendance>))` - Route call and confirmed attendances, oldest first
    /// - `Err(AppError::NotFound)` - No route call with that id
    pub async fn get_by_id(&self, id: Uuid) -> Result<(RouteCall, Vec<Attendance>), AppError> {
        let route_call = RouteCallRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

        let attendances = AttendanceRepository::new(self.db)
            .get_confirmed_by_route_call(id)
            .await?;

        Ok((route_call, attendances))
    }

    /// Updates a route call. Organizer only.
    pub async fn update(
        &self,
        id: Uuid,
        user: &User,
        params: UpdateRouteCallParams,
    ) -> Result<RouteCall, AppError> {
        let repo = RouteCallRepository::new(self.db);

        let route_call = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

        if route_call.organizer_id != user.id {
            return Err(AppError::Forbidden(
                "Only the organizer can update this route call".to_string(),
            ));
        }

        Ok(repo.update(id, params).await?)
    }

    /// Cancels a route call. Organizer or admin.
    ///
    /// # Returns
    /// - `Ok(RouteCall)` - Route call now CANCELLED
    /// - `Err(AppError::NotFound)` - No route call with that id
    /// - `Err(AppError::Forbidden)` - Caller is neither organizer nor admin
    /// - `Err(AppError::BadRequest)` - Route call is completed or already cancelled
    pub async fn cancel(&self, id: Uuid, user: &User) -> Result<RouteCall, AppError> {
        let repo = RouteCallRepository::new(self.db);

        let route_call = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

        if route_call.organizer_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "Only the organizer or an admin can cancel this route call".to_string(),
            ));
        }

        match route_call.status {
            RouteCallStatus::Completed => Err(AppError::BadRequest(
                "Cannot cancel a completed route call".to_string(),
            )),
            RouteCallStatus::Cancelled => Err(AppError::BadRequest(
                "Route call is already cancelled".to_string(),
            )),
            RouteCallStatus::Scheduled | RouteCallStatus::Ongoing => {
                let cancelled = repo.set_status(id, RouteCallStatus::Cancelled).await?;
                tracing::info!("Route call {} cancelled by {}", id, user.id);
                Ok(cancelled)
            }
        }
    }

    /// Deletes a route call without attendances. Organizer or admin.
    pub async fn delete(&self, id: Uuid, user: &User) -> Result<(), AppError> {
        let repo = RouteCallRepository::new(self.db);

        let route_call = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

        if route_call.organizer_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "Only the organizer or an admin can delete this route call".to_string(),
            ));
        }

        let attendances = AttendanceRepository::new(self.db)
            .count_by_route_call(id)
            .await?;
        if attendances > 0 {
            return Err(AppError::BadRequest(
                "Cannot delete a route call with attendances. Cancel it instead.".to_string(),
            ));
        }

        repo.delete(id).await?;
        tracing::info!("Route call {} deleted by {}", id, user.id);

        Ok(())
    }
}
