//! Catalog route domain models.
//!
//! Routes are seeded by migration and read-only through the API. Listings carry relation
//! counters and the mean review rating alongside the route itself.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RouteLevel;
use uuid::Uuid;

use crate::{
    model::{
        favorite::FavoriteRouteDto,
        photo::GalleryOwnerDto,
        route::{RouteCountsDto, RouteDetailDto, RouteDto, RouteSummaryDto},
        route_call::RouteCallRouteDto,
    },
    server::model::{photo::Photo, review::Review},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    pub description: String,
    pub map_embed_url: Option<String>,
    pub gpx_file_url: Option<String>,
    pub level: Vec<RouteLevel>,
    pub created_at: DateTime<Utc>,
}

impl Route {
    /// Converts an entity model to a route domain model at the repository boundary.
    pub fn from_entity(entity: entity::route::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            image: entity.image,
            approximate_distance: entity.approximate_distance,
            description: entity.description,
            map_embed_url: entity.map_embed_url,
            gpx_file_url: entity.gpx_file_url,
            level: entity.level.0,
            created_at: entity.created_at,
        }
    }

    pub fn into_summary_dto(self) -> RouteSummaryDto {
        RouteSummaryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            image: self.image,
            approximate_distance: self.approximate_distance,
            level: self.level,
            map_embed_url: self.map_embed_url,
        }
    }

    /// Route reference embedded in a favorite, optionally with its counters.
    pub fn into_favorite_dto(self, counts: Option<(u64, u64)>) -> FavoriteRouteDto {
        FavoriteRouteDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            image: self.image,
            approximate_distance: self.approximate_distance,
            level: self.level,
            counts: counts.map(|(reviews, route_calls)| {
                crate::model::favorite::FavoriteRouteCountsDto {
                    reviews,
                    route_calls,
                }
            }),
        }
    }

    /// Route reference embedded in a route call.
    ///
    /// # Arguments
    /// - `detailed` - Include description and map link (route call detail view)
    pub fn into_route_call_dto(self, detailed: bool) -> RouteCallRouteDto {
        RouteCallRouteDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            image: self.image,
            approximate_distance: self.approximate_distance,
            level: self.level,
            description: detailed.then_some(self.description),
            map_embed_url: if detailed { self.map_embed_url } else { None },
        }
    }

    pub fn into_gallery_owner_dto(self) -> GalleryOwnerDto {
        GalleryOwnerDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Number of related rows per relation of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteCounts {
    pub reviews: u64,
    pub favorites: u64,
    pub route_calls: u64,
    /// ACTIVE photos only.
    pub photos: u64,
}

/// Route with its counters and mean rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteWithStats {
    pub route: Route,
    pub counts: RouteCounts,
    pub average_rating: f64,
}

impl RouteWithStats {
    pub fn into_dto(self) -> RouteDto {
        let route = self.route;
        RouteDto {
            id: route.id,
            name: route.name,
            slug: route.slug,
            image: route.image,
            approximate_distance: route.approximate_distance,
            description: route.description,
            map_embed_url: route.map_embed_url,
            gpx_file_url: route.gpx_file_url,
            level: route.level,
            created_at: route.created_at,
            average_rating: self.average_rating,
            counts: RouteCountsDto {
                reviews: self.counts.reviews,
                favorites: self.counts.favorites,
                route_calls: self.counts.route_calls,
                photos: self.counts.photos,
            },
        }
    }
}

/// Route detail view: stats plus reviews and the latest active photos.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDetail {
    pub stats: RouteWithStats,
    pub reviews: Vec<Review>,
    pub photos: Vec<Photo>,
}

impl RouteDetail {
    pub fn into_dto(self) -> RouteDetailDto {
        RouteDetailDto {
            route: self.stats.into_dto(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            photos: self.photos.into_iter().map(Photo::into_dto).collect(),
        }
    }
}

/// Mean of the given ratings rounded to one decimal, 0 when there are none.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}
