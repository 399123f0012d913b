use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{review::ReviewRepository, route::RouteRepository},
    error::AppError,
    model::{
        page::{Page, PageRequest},
        review::{CreateReviewParams, Review, UpdateReviewParams},
        user::User,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of a route's reviews, newest first.
    ///
    /// # Returns
    /// - `Ok(Page<Review>)` - Requested page
    /// - `Err(AppError::NotFound)` - Route does not exist
    pub async fn get_by_route(
        &self,
        route_id: Uuid,
        request: PageRequest,
    ) -> Result<Page<Review>, AppError> {
        if !RouteRepository::new(self.db).exists(route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        Ok(ReviewRepository::new(self.db)
            .get_by_route_paginated(route_id, request)
            .await?)
    }

    /// Creates a review. A user can review each route once.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(AppError::NotFound)` - Route does not exist
    /// - `Err(AppError::Conflict)` - User already reviewed the route
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        if !RouteRepository::new(self.db).exists(params.route_id).await? {
            return Err(AppError::NotFound("Route not found".to_string()));
        }
        if repo.exists_for_user(params.user_id, params.route_id).await? {
            return Err(AppError::Conflict(
                "You have already reviewed this route".to_string(),
            ));
        }

        Ok(repo.create(params).await?)
    }

    /// Updates a review owned by `user`.
    ///
    /// # Returns
    /// - `Ok(Review)` - Updated review
    /// - `Err(AppError::NotFound)` - Review does not exist
    /// - `Err(AppError::Forbidden)` - Review belongs to someone else
    pub async fn update(
        &self,
        id: Uuid,
        user: &User,
        params: UpdateReviewParams,
    ) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        let review = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if review.user_id != user.id {
            return Err(AppError::Forbidden(
                "You don't have permission to edit this review".to_string(),
            ));
        }

        Ok(repo.update(id, params).await?)
    }

    /// Deletes a review. Owners and admins may delete.
    pub async fn delete(&self, id: Uuid, user: &User) -> Result<(), AppError> {
        let repo = ReviewRepository::new(self.db);

        let review = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if review.user_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "You don't have permission to delete this review".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
