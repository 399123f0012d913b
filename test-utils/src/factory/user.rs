//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .clerk_id("user_2abc")
///     .name("Lucía")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    clerk_id: String,
    email: String,
    name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - clerk_id: `"user_{id}"` where id is auto-incremented
    /// - email: `"skater{id}@example.com"`
    /// - name: `"Skater {id}"`
    /// - role: `USER`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            clerk_id: format!("user_{}", id),
            email: format!("skater{}@example.com", id),
            name: Some(format!("Skater {}", id)),
            last_name: None,
            image_url: None,
            role: UserRole::User,
        }
    }

    /// Sets the identity provider id for the user.
    pub fn clerk_id(mut self, clerk_id: impl Into<String>) -> Self {
        self.clerk_id = clerk_id.into();
        self
    }

    /// Sets the email for the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the first name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the last name for the user.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the avatar URL for the user.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Grants or removes the ADMIN role.
    ///
    /// # Arguments
    /// - `admin` - Whether the user should have admin privileges
    pub fn admin(mut self, admin: bool) -> Self {
        self.role = if admin { UserRole::Admin } else { UserRole::User };
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            clerk_id: ActiveValue::Set(self.clerk_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            last_name: ActiveValue::Set(self.last_name),
            image_url: ActiveValue::Set(self.image_url),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the ADMIN role.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.clerk_id.starts_with("user_"));
        assert!(user.name.is_some());
        assert_eq!(user.role, UserRole::User);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .clerk_id("user_custom")
            .email("custom@example.com")
            .name("Custom")
            .admin(true)
            .build()
            .await?;

        assert_eq!(user.clerk_id, "user_custom");
        assert_eq!(user.email, "custom@example.com");
        assert_eq!(user.name.as_deref(), Some("Custom"));
        assert_eq!(user.role, UserRole::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_user(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.clerk_id, second.clerk_id);

        Ok(())
    }
}
