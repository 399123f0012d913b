//! Route review repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::require_related,
    model::{
        page::{Page, PageRequest},
        review::{CreateReviewParams, Review, UpdateReviewParams},
    },
};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review and returns it with its author.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(DbErr)` - Database error, including a unique violation when the user already
    ///   reviewed the route
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();
        let review = entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            route_id: ActiveValue::Set(params.route_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.get_by_id(review.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Review {} not found after creation", review.id)))
    }

    /// Gets a review with its author.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Review>, DbErr> {
        let Some((review, user)) = entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = require_related(user, "Author", review.id)?;
        Ok(Some(Review::from_entity(review, user)))
    }

    /// Checks whether a user already reviewed a route.
    pub async fn exists_for_user(&self, user_id: Uuid, route_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(entity::review::Column::RouteId.eq(route_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial update. Only fields present in `params` change.
    ///
    /// # Returns
    /// - `Ok(Review)` - Updated review with author
    /// - `Err(DbErr::RecordNotFound)` - No review with that id
    pub async fn update(&self, id: Uuid, params: UpdateReviewParams) -> Result<Review, DbErr> {
        let review = entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Review {} not found", id)))?;

        let mut active: entity::review::ActiveModel = review.into();
        if let Some(rating) = params.rating {
            active.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = params.comment {
            active.comment = ActiveValue::Set(Some(comment));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Review {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Gets all reviews of a route with authors, newest first.
    pub async fn get_by_route(&self, route_id: Uuid) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::review::Column::RouteId.eq(route_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(review, user)| {
                let user = require_related(user, "Author", review.id)?;
                Ok(Review::from_entity(review, user))
            })
            .collect()
    }

    /// Gets one page of a route's reviews with authors, newest first.
    pub async fn get_by_route_paginated(
        &self,
        route_id: Uuid,
        request: PageRequest,
    ) -> Result<Page<Review>, DbErr> {
        let paginator = entity::prelude::Review::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::review::Column::RouteId.eq(route_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .paginate(self.db, request.limit);

        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(request.index()).await?;

        let items = rows
            .into_iter()
            .map(|(review, user)| {
                let user = require_related(user, "Author", review.id)?;
                Ok(Review::from_entity(review, user))
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Page {
            items,
            request,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }
}
