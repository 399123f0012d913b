//! Route factory for creating catalog routes in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::{route::RouteLevels, sea_orm_active_enums::RouteLevel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test routes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let route = RouteFactory::new(&db)
///     .name("Clásica")
///     .slug("clasica")
///     .levels(vec![RouteLevel::Intermediate])
///     .build()
///     .await?;
/// ```
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    image: String,
    approximate_distance: String,
    description: String,
    map_embed_url: Option<String>,
    levels: Vec<RouteLevel>,
}

impl<'a> RouteFactory<'a> {
    /// Creates a new RouteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Route {id}"`
    /// - slug: `"route-{id}"`
    /// - approximate_distance: `"15 km"`
    /// - levels: `[INTERMEDIATE]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Route {}", id),
            slug: format!("route-{}", id),
            image: format!("https://images.example.com/routes/{}.jpg", id),
            approximate_distance: "15 km".to_string(),
            description: "A relaxed loop through the city".to_string(),
            map_embed_url: None,
            levels: vec![RouteLevel::Intermediate],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn map_embed_url(mut self, url: impl Into<String>) -> Self {
        self.map_embed_url = Some(url.into());
        self
    }

    pub fn levels(mut self, levels: Vec<RouteLevel>) -> Self {
        self.levels = levels;
        self
    }

    /// Builds and inserts the route entity into the database.
    pub async fn build(self) -> Result<entity::route::Model, DbErr> {
        let now = Utc::now();
        entity::route::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            image: ActiveValue::Set(self.image),
            approximate_distance: ActiveValue::Set(self.approximate_distance),
            description: ActiveValue::Set(self.description),
            map_embed_url: ActiveValue::Set(self.map_embed_url),
            gpx_file_url: ActiveValue::Set(None),
            level: ActiveValue::Set(RouteLevels(self.levels)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a route with default values.
pub async fn create_route(db: &DatabaseConnection) -> Result<entity::route::Model, DbErr> {
    RouteFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_route_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Route).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let route = create_route(db).await?;

        assert!(route.slug.starts_with("route-"));
        assert_eq!(route.level, RouteLevels(vec![RouteLevel::Intermediate]));

        Ok(())
    }

    #[tokio::test]
    async fn stores_multiple_levels() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Route).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let route = RouteFactory::new(db)
            .levels(vec![RouteLevel::Beginner, RouteLevel::Intermediate])
            .build()
            .await?;

        assert_eq!(route.level.0.len(), 2);

        Ok(())
    }
}
