//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating route reviews. Defaults to a 4-star review without comment.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    route_id: Uuid,
    rating: i32,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, route_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            route_id,
            rating: 4,
            comment: None,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            route_id: ActiveValue::Set(self.route_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with the given rating.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: Uuid,
    route_id: Uuid,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, route_id)
        .rating(rating)
        .build()
        .await
}
