//! Favorite routes repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{data::require_related, model::favorite::Favorite};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a route to a user's favorites and returns it with the route.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Created favorite
    /// - `Err(DbErr)` - Database error, including a unique violation for duplicates
    pub async fn create(&self, user_id: Uuid, route_id: Uuid) -> Result<Favorite, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            route_id: ActiveValue::Set(route_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let route = entity::prelude::Route::find_by_id(route_id).one(self.db).await?;
        let route = require_related(route, "Route", favorite.id)?;

        Ok(Favorite::from_entity(favorite, route))
    }

    pub async fn find(
        &self,
        user_id: Uuid,
        route_id: Uuid,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::RouteId.eq(route_id))
            .one(self.db)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Favorite::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Gets a user's favorites with their routes, newest first.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .find_also_related(entity::prelude::Route)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(favorite, route)| {
                let route = require_related(route, "Route", favorite.id)?;
                Ok(Favorite::from_entity(favorite, route))
            })
            .collect()
    }
}
