use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::model::user::User,
};

/// Review of a catalog route together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub route_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: User,
}

impl Review {
    /// Converts entity models to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            route_id: entity.route_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: User::from_entity(user),
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            route_id: self.route_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.into_summary_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub route_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}

impl CreateReviewParams {
    pub fn from_dto(route_id: Uuid, user_id: Uuid, dto: CreateReviewDto) -> Self {
        Self {
            route_id,
            user_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// Partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Self {
        Self {
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
