//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing the local mirror of identity
//! provider users.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user mirrored from the identity provider.
    ///
    /// Conflicts on `clerk_id` refresh the profile columns instead of failing, so two
    /// concurrent first requests for the same identity converge on a single row. The role of
    /// an existing row is never touched.
    ///
    /// # Arguments
    /// - `params` - Profile fetched from the identity provider
    ///
    /// # Returns
    /// - `Ok(User)` - The created or existing user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            clerk_id: ActiveValue::Set(params.clerk_id),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            last_name: ActiveValue::Set(params.last_name),
            image_url: ActiveValue::Set(params.image_url),
            role: ActiveValue::Set(UserRole::User),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ClerkId)
                .update_columns([
                    entity::user::Column::Email,
                    entity::user::Column::Name,
                    entity::user::Column::LastName,
                    entity::user::Column::ImageUrl,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by identity provider id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User already mirrored locally
    /// - `Ok(None)` - Identity not seen before
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ClerkId.eq(clerk_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Loads several users at once, keyed by id.
    ///
    /// Used to attach uploaders and moderators to photos, organizers to route calls and
    /// similar lookups without one query per row.
    pub async fn find_by_ids(
        &self,
        ids: impl IntoIterator<Item = Uuid>,
    ) -> Result<HashMap<Uuid, entity::user::Model>, DbErr> {
        let mut ids: Vec<Uuid> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}
