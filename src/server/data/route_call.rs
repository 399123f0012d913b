//! Route call repository.
//!
//! Route calls are always returned with their relations attached (route, organizer, meeting
//! points and confirmed attendance count). Relations are loaded in batches for a whole page of
//! route calls rather than per row.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{AttendanceStatus, RouteCallStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    data::{grouped_counts, require_related, user::UserRepository},
    model::{
        page::{Page, PageRequest},
        route_call::{NewRouteCall, RouteCall, RouteCallFilter, UpdateRouteCallParams},
    },
};

pub struct RouteCallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteCallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a route call and its meeting points in one transaction.
    ///
    /// The route call starts SCHEDULED.
    ///
    /// # Returns
    /// - `Ok(RouteCall)` - Created route call with relations
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: NewRouteCall) -> Result<RouteCall, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let route_call = entity::route_call::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            route_id: ActiveValue::Set(params.route_id),
            organizer_id: ActiveValue::Set(params.organizer_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            date_route: ActiveValue::Set(params.date_route),
            pace: ActiveValue::Set(params.pace),
            status: ActiveValue::Set(RouteCallStatus::Scheduled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        for point in params.meeting_points {
            entity::meeting_point::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                route_call_id: ActiveValue::Set(route_call.id),
                point_type: ActiveValue::Set(point.point_type),
                name: ActiveValue::Set(point.name),
                custom_name: ActiveValue::Set(point.custom_name),
                location: ActiveValue::Set(point.location),
                time: ActiveValue::Set(point.time),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_by_id(route_call.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Route call {} not found after creation", route_call.id))
        })
    }

    /// Gets the bare route call row, for existence and ownership checks.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::route_call::Model>, DbErr> {
        entity::prelude::RouteCall::find_by_id(id).one(self.db).await
    }

    /// Gets a route call with all of its relations.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<RouteCall>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.with_relations(vec![model]).await?.pop())
    }

    /// Gets one page of route calls matching `filter`.
    ///
    /// Upcoming listings (`upcoming = true`) only include SCHEDULED or ONGOING calls dated
    /// from now on, soonest first. Past listings (`upcoming = false`) include calls dated
    /// before now or already COMPLETED/CANCELLED, most recent first. Without the flag all calls
    /// are returned soonest first.
    pub async fn get_paginated(
        &self,
        filter: RouteCallFilter,
        request: PageRequest,
    ) -> Result<Page<RouteCall>, DbErr> {
        let paginator = Self::filtered(filter).paginate(self.db, request.limit);

        let totals = paginator.num_items_and_pages().await?;
        let models = paginator.fetch_page(request.index()).await?;
        let items = self.with_relations(models).await?;

        Ok(Page {
            items,
            request,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    fn filtered(filter: RouteCallFilter) -> Select<entity::route_call::Entity> {
        use entity::route_call::Column;

        let mut query = entity::prelude::RouteCall::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }
        if let Some(organizer_id) = filter.organizer_id {
            query = query.filter(Column::OrganizerId.eq(organizer_id));
        }
        if let Some(route_id) = filter.route_id {
            query = query.filter(Column::RouteId.eq(route_id));
        }

        let now = Utc::now();
        match filter.upcoming {
            Some(true) => query
                .filter(Column::DateRoute.gte(now))
                .filter(Column::Status.is_in([RouteCallStatus::Scheduled, RouteCallStatus::Ongoing]))
                .order_by_asc(Column::DateRoute),
            Some(false) => query
                .filter(
                    Condition::any().add(Column::DateRoute.lt(now)).add(
                        Column::Status
                            .is_in([RouteCallStatus::Completed, RouteCallStatus::Cancelled]),
                    ),
                )
                .order_by_desc(Column::DateRoute),
            None => query.order_by_asc(Column::DateRoute),
        }
    }

    /// Applies a partial update. Only fields present in `params` change.
    pub async fn update(&self, id: Uuid, params: UpdateRouteCallParams) -> Result<RouteCall, DbErr> {
        let model = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Route call {} not found", id)))?;

        let mut active: entity::route_call::ActiveModel = model.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(date_route) = params.date_route {
            active.date_route = ActiveValue::Set(date_route);
        }
        if let Some(pace) = params.pace {
            active.pace = ActiveValue::Set(pace);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Route call {} not found", id)))
    }

    pub async fn set_status(&self, id: Uuid, status: RouteCallStatus) -> Result<RouteCall, DbErr> {
        entity::route_call::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Route call {} not found", id)))
    }

    /// Deletes a route call together with its meeting points.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::MeetingPoint::delete_many()
            .filter(entity::meeting_point::Column::RouteCallId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::RouteCall::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Attaches route, organizer, meeting points and confirmed attendance counts.
    ///
    /// Preserves the order of `models`.
    pub async fn with_relations(
        &self,
        models: Vec<entity::route_call::Model>,
    ) -> Result<Vec<RouteCall>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let route_ids: Vec<Uuid> = models.iter().filter_map(|m| m.route_id).collect();

        let routes: HashMap<Uuid, entity::route::Model> = if route_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Route::find()
                .filter(entity::route::Column::Id.is_in(route_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| (r.id, r))
                .collect()
        };

        let organizers = UserRepository::new(self.db)
            .find_by_ids(models.iter().map(|m| m.organizer_id))
            .await?;

        let mut meeting_points: HashMap<Uuid, Vec<entity::meeting_point::Model>> = HashMap::new();
        for point in entity::prelude::MeetingPoint::find()
            .filter(entity::meeting_point::Column::RouteCallId.is_in(ids.clone()))
            .all(self.db)
            .await?
        {
            meeting_points.entry(point.route_call_id).or_default().push(point);
        }

        let confirmed = grouped_counts(
            self.db,
            entity::prelude::Attendance::find()
                .filter(entity::attendance::Column::RouteCallId.is_in(ids))
                .filter(entity::attendance::Column::Status.eq(AttendanceStatus::Confirmed)),
            entity::attendance::Column::RouteCallId,
        )
        .await?;

        models
            .into_iter()
            .map(|model| {
                let route = model.route_id.and_then(|id| routes.get(&id).cloned());
                let organizer =
                    require_related(organizers.get(&model.organizer_id).cloned(), "Organizer", model.id)?;
                let points = meeting_points.remove(&model.id).unwrap_or_default();
                let confirmed = confirmed.get(&model.id).copied().unwrap_or(0);

                Ok(RouteCall::from_entity(model, route, organizer, points, confirmed))
            })
            .collect()
    }
}
