//! Photo factory for gallery and moderation tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating photos.
///
/// Starts from an ACTIVE, unmoderated photo in the given context. Attach it to a
/// route or route call with [`PhotoFactory::route`] / [`PhotoFactory::route_call`].
pub struct PhotoFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    context: PhotoContext,
    route_id: Option<Uuid>,
    route_call_id: Option<Uuid>,
    image_url: String,
    caption: Option<String>,
    status: PhotoStatus,
    moderated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> PhotoFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, context: PhotoContext) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            context,
            route_id: None,
            route_call_id: None,
            image_url: format!(
                "https://project.supabase.co/storage/v1/object/public/photos/general/{}.jpg",
                id
            ),
            caption: None,
            status: PhotoStatus::Active,
            moderated_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn route(mut self, route_id: Uuid) -> Self {
        self.route_id = Some(route_id);
        self
    }

    pub fn route_call(mut self, route_call_id: Uuid) -> Self {
        self.route_call_id = Some(route_call_id);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn status(mut self, status: PhotoStatus) -> Self {
        self.status = status;
        self
    }

    pub fn moderated_at(mut self, moderated_at: DateTime<Utc>) -> Self {
        self.moderated_at = Some(moderated_at);
        self
    }

    /// Overrides the creation timestamp, useful for ordering assertions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::photo::Model, DbErr> {
        entity::photo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            context: ActiveValue::Set(self.context),
            route_id: ActiveValue::Set(self.route_id),
            route_call_id: ActiveValue::Set(self.route_call_id),
            user_id: ActiveValue::Set(self.user_id),
            image_url: ActiveValue::Set(self.image_url),
            caption: ActiveValue::Set(self.caption),
            status: ActiveValue::Set(self.status),
            moderated_by: ActiveValue::Set(None),
            moderated_at: ActiveValue::Set(self.moderated_at),
            moderation_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ACTIVE route gallery photo.
pub async fn create_route_photo(
    db: &DatabaseConnection,
    user_id: Uuid,
    route_id: Uuid,
) -> Result<entity::photo::Model, DbErr> {
    PhotoFactory::new(db, user_id, PhotoContext::RouteGallery)
        .route(route_id)
        .build()
        .await
}
