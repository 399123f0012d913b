//! Favorite factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Marks a route as favorite for a user.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: Uuid,
    route_id: Uuid,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        route_id: ActiveValue::Set(route_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
