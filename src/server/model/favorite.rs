use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{model::favorite::FavoriteDto, server::model::route::Route};

/// Favorite with the route it points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub route: Route,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model, route: entity::route::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            route_id: entity.route_id,
            created_at: entity.created_at,
            route: Route::from_entity(route),
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            route_id: self.route_id,
            created_at: self.created_at,
            route: self.route.into_favorite_dto(None),
        }
    }
}

/// Favorite listed on the owner's favorites page, with route counters.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteWithCounts {
    pub favorite: Favorite,
    pub reviews: u64,
    pub route_calls: u64,
}

impl FavoriteWithCounts {
    pub fn into_dto(self) -> FavoriteDto {
        let favorite = self.favorite;
        FavoriteDto {
            id: favorite.id,
            user_id: favorite.user_id,
            route_id: favorite.route_id,
            created_at: favorite.created_at,
            route: favorite
                .route
                .into_favorite_dto(Some((self.reviews, self.route_calls))),
        }
    }
}
