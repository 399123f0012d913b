//! User domain models and parameters.
//!
//! Users are local mirrors of identities managed by the external identity provider. They are
//! created lazily the first time a valid token for a new identity is seen.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

use crate::model::user::{UserDto, UserSummaryDto};

/// Local user mirrored from the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Identity provider user id (`sub` claim of session tokens).
    pub clerk_id: String,
    pub email: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            clerk_id: entity.clerk_id,
            email: entity.email,
            name: entity.name,
            last_name: entity.last_name,
            image_url: entity.image_url,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            clerk_id: self.clerk_id,
            email: self.email,
            name: self.name,
            last_name: self.last_name,
            image_url: self.image_url,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Public summary without the last name, used in listings.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            last_name: None,
            image_url: self.image_url,
        }
    }

    /// Public summary including the last name, used on detail views.
    pub fn into_full_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            last_name: self.last_name,
            image_url: self.image_url,
        }
    }
}

/// Profile fetched from the identity provider for a user seen for the first time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateUserParams {
    pub clerk_id: String,
    /// Primary email address, empty when the provider has none.
    pub email: String,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}
