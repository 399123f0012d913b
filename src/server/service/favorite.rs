use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{favorite::FavoriteRepository, route::RouteRepository},
    error::AppError,
    model::favorite::{Favorite, FavoriteWithCounts},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a route to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Created favorite with route summary
    /// - `Err(AppError::NotFound)` - Route does not exist
    /// - `Err(AppError::Conflict)` - Route already in favorites
    pub async fn add(&self, user_id: Uuid, route_id: Uuid) -> Result<Favorite, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !RouteRepository::new(self.db).exists(route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }
        if repo.find(user_id, route_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Route is already in your favorites".to_string(),
            ));
        }

        Ok(repo.create(user_id, route_id).await?)
    }

    /// Removes a route from the user's favorites.
    pub async fn remove(&self, user_id: Uuid, route_id: Uuid) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        let favorite = repo
            .find(user_id, route_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))?;

        repo.delete(favorite.id).await?;

        Ok(())
    }

    /// Lists the user's favorites, newest first, with review and route call counts.
    pub async fn get_mine(&self, user_id: Uuid) -> Result<Vec<FavoriteWithCounts>, AppError> {
        let favorites = FavoriteRepository::new(self.db).get_by_user(user_id).await?;

        let route_ids: Vec<Uuid> = favorites.iter().map(|f| f.route_id).collect();
        let counts = RouteRepository::new(self.db).get_counts(&route_ids).await?;

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let route_counts = counts.get(&favorite.route_id).copied().unwrap_or_default();
                FavoriteWithCounts {
                    favorite,
                    reviews: route_counts.reviews,
                    route_calls: route_counts.route_calls,
                }
            })
            .collect())
    }

    pub async fn is_favorite(&self, user_id: Uuid, route_id: Uuid) -> Result<bool, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .find(user_id, route_id)
            .await?
            .is_some())
    }
}
