//! Route call and meeting point factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::{MeetingPointType, RouteCallStatus, RoutePace};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test route calls.
///
/// Defaults to a custom (route-less) SCHEDULED outing two days from now. Use
/// [`RouteCallFactory::route`] to attach it to a catalog route.
pub struct RouteCallFactory<'a> {
    db: &'a DatabaseConnection,
    organizer_id: Uuid,
    route_id: Option<Uuid>,
    title: String,
    description: Option<String>,
    image: String,
    date_route: DateTime<Utc>,
    pace: RoutePace,
    status: RouteCallStatus,
}

impl<'a> RouteCallFactory<'a> {
    /// Creates a new RouteCallFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `organizer_id` - ID of the user organizing the outing
    pub fn new(db: &'a DatabaseConnection, organizer_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            organizer_id,
            route_id: None,
            title: format!("Outing {}", id),
            description: None,
            image: "https://images.example.com/route-calls/default.jpg".to_string(),
            date_route: Utc::now() + Duration::days(2),
            pace: RoutePace::Gusano,
            status: RouteCallStatus::Scheduled,
        }
    }

    /// Links the route call to a catalog route, taking over its name and image.
    pub fn route(mut self, route: &entity::route::Model) -> Self {
        self.route_id = Some(route.id);
        self.title = route.name.clone();
        self.image = route.image.clone();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date_route(mut self, date_route: DateTime<Utc>) -> Self {
        self.date_route = date_route;
        self
    }

    pub fn pace(mut self, pace: RoutePace) -> Self {
        self.pace = pace;
        self
    }

    pub fn status(mut self, status: RouteCallStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the route call entity into the database.
    pub async fn build(self) -> Result<entity::route_call::Model, DbErr> {
        let now = Utc::now();
        entity::route_call::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            route_id: ActiveValue::Set(self.route_id),
            organizer_id: ActiveValue::Set(self.organizer_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            date_route: ActiveValue::Set(self.date_route),
            pace: ActiveValue::Set(self.pace),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom route call organized by the given user.
pub async fn create_route_call(
    db: &DatabaseConnection,
    organizer_id: Uuid,
) -> Result<entity::route_call::Model, DbErr> {
    RouteCallFactory::new(db, organizer_id).build().await
}

/// Creates a meeting point at the Explanada for a route call.
pub async fn create_meeting_point(
    db: &DatabaseConnection,
    route_call_id: Uuid,
    point_type: MeetingPointType,
) -> Result<entity::meeting_point::Model, DbErr> {
    entity::meeting_point::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        route_call_id: ActiveValue::Set(route_call_id),
        point_type: ActiveValue::Set(point_type),
        name: ActiveValue::Set("Explanada".to_string()),
        custom_name: ActiveValue::Set(None),
        location: ActiveValue::Set(Some(
            "https://maps.app.goo.gl/gCJfpLSoy3D454Y19".to_string(),
        )),
        time: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_custom_route_call_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_route_call_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let organizer = crate::factory::user::create_user(db).await?;
        let route_call = create_route_call(db, organizer.id).await?;

        assert_eq!(route_call.organizer_id, organizer.id);
        assert!(route_call.route_id.is_none());
        assert_eq!(route_call.status, RouteCallStatus::Scheduled);
        assert!(route_call.date_route > Utc::now());

        Ok(())
    }

    #[tokio::test]
    async fn creates_route_call_on_catalog_route() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_route_call_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (organizer, route, route_call) =
            crate::factory::helpers::create_route_call_with_dependencies(db).await?;

        assert_eq!(route_call.organizer_id, organizer.id);
        assert_eq!(route_call.route_id, Some(route.id));
        assert_eq!(route_call.title, route.name);

        Ok(())
    }
}
