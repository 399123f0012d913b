use sea_orm::DatabaseConnection;

use crate::server::{
    data::{photo::PhotoRepository, review::ReviewRepository, route::RouteRepository},
    error::AppError,
    model::route::{RouteDetail, RouteWithStats},
};

/// Number of photos shown on the route detail view.
const DETAIL_PHOTO_LIMIT: u64 = 20;

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the whole catalog ordered by name, with counters and mean rating.
    pub async fn get_all(&self) -> Result<Vec<RouteWithStats>, AppError> {
        let repo = RouteRepository::new(self.db);

        let routes = repo.get_all().await?;

        Ok(repo.with_stats(routes).await?)
    }

    /// Gets a route by slug with reviews (newest first) and its latest active photos.
    ///
    /// # Returns
    /// - `Ok(RouteDetail)` - Route found
    /// - `Err(AppError::NotFound)` - No route with that slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<RouteDetail, AppError> {
        let repo = RouteRepository::new(self.db);

        let route = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        let reviews = ReviewRepository::new(self.db).get_by_route(route.id).await?;
        let photos = PhotoRepository::new(self.db)
            .get_active_by_route(route.id, Some(DETAIL_PHOTO_LIMIT))
            .await?;

        let stats = repo
            .with_stats(vec![route])
            .await?
            .pop()
            .ok_or_else(|| AppError::InternalError("Route stats missing".to_string()))?;

        Ok(RouteDetail {
            stats,
            reviews,
            photos,
        })
    }
}
