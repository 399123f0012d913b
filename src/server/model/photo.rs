//! Photo domain models and parameters.
//!
//! Photos follow post-moderation: they are published as ACTIVE on upload and an admin later
//! approves (stamps the moderation fields) or rejects them. Owners soft-delete them.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use uuid::Uuid;

use crate::{
    model::photo::{GalleryOwnerDto, PhotoDto, PhotoQuery, RouteCallGalleryDto, RouteGalleryDto},
    server::model::{route::Route, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: Uuid,
    pub context: PhotoContext,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub status: PhotoStatus,
    pub moderated_by: Option<Uuid>,
    pub moderated_at: Option<DateTime<Utc>>,
    pub moderation_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Uploader.
    pub user: User,
    /// Admin who moderated the photo, loaded only for the owner's listing.
    pub moderator: Option<User>,
}

impl Photo {
    /// Converts entity models to a photo domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::photo::Model,
        user: entity::user::Model,
        moderator: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            context: entity.context,
            route_id: entity.route_id,
            route_call_id: entity.route_call_id,
            user_id: entity.user_id,
            image_url: entity.image_url,
            caption: entity.caption,
            status: entity.status,
            moderated_by: entity.moderated_by,
            moderated_at: entity.moderated_at,
            moderation_notes: entity.moderation_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            user: User::from_entity(user),
            moderator: moderator.map(User::from_entity),
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            context: self.context,
            route_id: self.route_id,
            route_call_id: self.route_call_id,
            user_id: self.user_id,
            image_url: self.image_url,
            caption: self.caption,
            status: self.status,
            moderated_by: self.moderated_by,
            moderated_at: self.moderated_at,
            moderation_notes: self.moderation_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: self.user.into_summary_dto(),
            moderator: self.moderator.map(User::into_summary_dto),
        }
    }
}

/// Metadata of an uploaded photo, stored after the file reached object storage.
#[derive(Debug, Clone)]
pub struct CreatePhotoParams {
    pub context: PhotoContext,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub user_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
}

/// Target of an upload, checked against the photo context.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoTarget {
    pub context: PhotoContext,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
}

impl PhotoTarget {
    /// Checks that the ids present match the context.
    ///
    /// ROUTE_GALLERY needs a route id, route call contexts need a route call id, and an upload
    /// can never reference both.
    ///
    /// # Returns
    /// - `Ok(())` - Target is consistent
    /// - `Err(&str)` - Message describing the inconsistency
    pub fn check(&self) -> Result<(), &'static str> {
        if self.route_id.is_some() && self.route_call_id.is_some() {
            return Err("Cannot provide both routeId and routeCallId");
        }
        match self.context {
            PhotoContext::RouteGallery if self.route_id.is_none() => {
                Err("routeId is required for ROUTE_GALLERY context")
            }
            PhotoContext::RouteCallCover | PhotoContext::RouteCallGallery
                if self.route_call_id.is_none() =>
            {
                Err("routeCallId is required for ROUTE_CALL_COVER and ROUTE_CALL_GALLERY contexts")
            }
            _ => Ok(()),
        }
    }
}

/// Filters for the photo listing. Status defaults to ACTIVE.
#[derive(Debug, Clone)]
pub struct PhotoFilter {
    pub context: Option<PhotoContext>,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub status: PhotoStatus,
}

impl Default for PhotoFilter {
    fn default() -> Self {
        Self {
            context: None,
            route_id: None,
            route_call_id: None,
            status: PhotoStatus::Active,
        }
    }
}

impl PhotoFilter {
    pub fn from_query(query: &PhotoQuery) -> Self {
        Self {
            context: query.context,
            route_id: query.route_id,
            route_call_id: query.route_call_id,
            status: query.status.unwrap_or(PhotoStatus::Active),
        }
    }
}

/// ACTIVE gallery photos of a catalog route.
#[derive(Debug, Clone)]
pub struct RouteGallery {
    pub route: Route,
    pub photos: Vec<Photo>,
}

impl RouteGallery {
    pub fn into_dto(self) -> RouteGalleryDto {
        RouteGalleryDto {
            count: self.photos.len() as u64,
            route: self.route.into_gallery_owner_dto(),
            photos: self.photos.into_iter().map(Photo::into_dto).collect(),
        }
    }
}

/// ACTIVE gallery photos of a route call.
#[derive(Debug, Clone)]
pub struct RouteCallGallery {
    pub route_call_id: Uuid,
    pub title: String,
    pub photos: Vec<Photo>,
}

impl RouteCallGallery {
    pub fn into_dto(self) -> RouteCallGalleryDto {
        RouteCallGalleryDto {
            count: self.photos.len() as u64,
            route_call: GalleryOwnerDto {
                id: self.route_call_id,
                name: self.title,
            },
            photos: self.photos.into_iter().map(Photo::into_dto).collect(),
        }
    }
}
