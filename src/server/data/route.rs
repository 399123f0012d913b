//! Route catalog repository.

use std::collections::HashMap;

use entity::sea_orm_active_enums::PhotoStatus;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::grouped_counts,
    model::route::{average_rating, Route, RouteCounts, RouteWithStats},
};

pub struct RouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every catalog route ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Route>, DbErr> {
        let routes = entity::prelude::Route::find()
            .order_by_asc(entity::route::Column::Name)
            .all(self.db)
            .await?;

        Ok(routes.into_iter().map(Route::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, DbErr> {
        let route = entity::prelude::Route::find_by_id(id).one(self.db).await?;

        Ok(route.map(Route::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Route>, DbErr> {
        let route = entity::prelude::Route::find()
            .filter(entity::route::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(route.map(Route::from_entity))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Route::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Counts related rows for each route.
    ///
    /// Photos only count when ACTIVE. Routes without any related row get zeroed counters.
    ///
    /// # Arguments
    /// - `route_ids` - Routes to count relations for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Counters keyed by route id, one entry per requested route
    /// - `Err(DbErr)` - Database error during any of the count queries
    pub async fn get_counts(
        &self,
        route_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, RouteCounts>, DbErr> {
        let reviews = grouped_counts(
            self.db,
            entity::prelude::Review::find()
                .filter(entity::review::Column::RouteId.is_in(route_ids.to_vec())),
            entity::review::Column::RouteId,
        )
        .await?;
        let favorites = grouped_counts(
            self.db,
            entity::prelude::Favorite::find()
                .filter(entity::favorite::Column::RouteId.is_in(route_ids.to_vec())),
            entity::favorite::Column::RouteId,
        )
        .await?;
        let route_calls = grouped_counts(
            self.db,
            entity::prelude::RouteCall::find()
                .filter(entity::route_call::Column::RouteId.is_in(route_ids.to_vec())),
            entity::route_call::Column::RouteId,
        )
        .await?;
        let photos = grouped_counts(
            self.db,
            entity::prelude::Photo::find()
                .filter(entity::photo::Column::RouteId.is_in(route_ids.to_vec()))
                .filter(entity::photo::Column::Status.eq(PhotoStatus::Active)),
            entity::photo::Column::RouteId,
        )
        .await?;

        Ok(route_ids
            .iter()
            .map(|id| {
                let count = |map: &HashMap<Uuid, u64>| map.get(id).copied().unwrap_or(0);
                (
                    *id,
                    RouteCounts {
                        reviews: count(&reviews),
                        favorites: count(&favorites),
                        route_calls: count(&route_calls),
                        photos: count(&photos),
                    },
                )
            })
            .collect())
    }

    /// Computes the rounded mean review rating of each route.
    ///
    /// Routes without reviews are absent from the map.
    pub async fn get_average_ratings(
        &self,
        route_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, f64>, DbErr> {
        let rows: Vec<(Uuid, i32)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::RouteId)
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::RouteId.is_in(route_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut ratings: HashMap<Uuid, Vec<i32>> = HashMap::new();
        for (route_id, rating) in rows {
            ratings.entry(route_id).or_default().push(rating);
        }

        Ok(ratings
            .into_iter()
            .map(|(id, values)| (id, average_rating(&values)))
            .collect())
    }

    /// Attaches counters and mean rating to each route, preserving order.
    pub async fn with_stats(&self, routes: Vec<Route>) -> Result<Vec<RouteWithStats>, DbErr> {
        let ids: Vec<Uuid> = routes.iter().map(|r| r.id).collect();
        let mut counts = self.get_counts(&ids).await?;
        let ratings = self.get_average_ratings(&ids).await?;

        Ok(routes
            .into_iter()
            .map(|route| RouteWithStats {
                counts: counts.remove(&route.id).unwrap_or_default(),
                average_rating: ratings.get(&route.id).copied().unwrap_or(0.0),
                route,
            })
            .collect())
    }
}
