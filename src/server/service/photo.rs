//! Photo gallery with post-moderation.
//!
//! Uploads go to object storage first and are published immediately as ACTIVE. Admins then
//! approve or reject them. Deletion is a soft delete that also removes the stored file.

use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        attendance::AttendanceRepository, photo::PhotoRepository, route::RouteRepository,
        route_call::RouteCallRepository,
    },
    error::AppError,
    model::{
        page::{Page, PageRequest},
        photo::{
            CreatePhotoParams, Photo, PhotoFilter, PhotoTarget, RouteCallGallery, RouteGallery,
        },
        user::User,
    },
    service::storage::PhotoStorage,
    util::upload::{folder_for, object_path, UploadedFile},
};

const MAX_CAPTION_LEN: usize = 500;

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn PhotoStorage,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn PhotoStorage) -> Self {
        Self { db, storage }
    }

    /// Uploads a photo and publishes it as ACTIVE.
    ///
    /// Route gallery uploads are open to any user. Route call covers are reserved to the
    /// organizer and route call galleries to confirmed attendees.
    ///
    /// # Arguments
    /// - `user_id` - Uploader
    /// - `target` - Context and the route or route call the photo belongs to
    /// - `caption` - Optional caption, at most 500 characters
    /// - `file` - Uploaded image
    ///
    /// # Returns
    /// - `Ok(Photo)` - Stored photo
    /// - `Err(AppError::BadRequest)` - Inconsistent target, caption or file
    /// - `Err(AppError::NotFound)` - Route or route call does not exist
    /// - `Err(AppError::Forbidden)` - User may not upload in this context
    /// - `Err(AppError::StorageErr)` - Object storage refused the file
    pub async fn upload(
        &self,
        user_id: Uuid,
        target: PhotoTarget,
        caption: Option<String>,
        file: UploadedFile,
    ) -> Result<Photo, AppError> {
        target
            .check()
            .map_err(|msg| AppError::BadRequest(msg.to_string()))?;
        if caption
            .as_ref()
            .is_some_and(|c| c.chars().count() > MAX_CAPTION_LEN)
        {
            return Err(AppError::BadRequest(
                "Caption must be at most 500 characters".to_string(),
            ));
        }
        let extension = file.validate()?;

        match (target.context, target.route_id, target.route_call_id) {
            (PhotoContext::RouteGallery, Some(route_id), _) => {
                if !RouteRepository::new(self.db).exists(route_id).await? {
                    return Err(AppError::NotFound("Route not found".to_string()));
                }
            }
            (context, _, Some(route_call_id)) => {
                let route_call = RouteCallRepository::new(self.db)
                    .find_by_id(route_call_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;

                if context == PhotoContext::RouteCallCover && route_call.organizer_id != user_id
                {
                    return Err(AppError::Forbidden(
                        "Only the organizer can upload a cover photo".to_string(),
                    ));
                }
                if context == PhotoContext::RouteCallGallery
                    && !AttendanceRepository::new(self.db)
                        .is_confirmed(route_call_id, user_id)
                        .await?
                {
                    return Err(AppError::Forbidden(
                        "Only confirmed attendees can upload photos to this route call gallery"
                            .to_string(),
                    ));
                }
            }
            _ => {}
        }

        let path = object_path(folder_for(target.context), extension);
        let image_url = self
            .storage
            .upload(&path, file.bytes, &file.content_type)
            .await?;

        tracing::info!("User {} uploaded photo {}", user_id, path);

        Ok(PhotoRepository::new(self.db)
            .create(CreatePhotoParams {
                context: target.context,
                route_id: target.route_id,
                route_call_id: target.route_call_id,
                user_id,
                image_url,
                caption,
            })
            .await?)
    }

    /// Replaces the cover of a route call, or creates it when there is none.
    ///
    /// The previous cover file is removed from storage; a failed removal is only logged.
    ///
    /// # Returns
    /// - `Ok(Photo)` - Current cover photo
    /// - `Err(AppError::NotFound)` - Route call does not exist
    /// - `Err(AppError::Forbidden)` - User is not the organizer
    pub async fn update_cover(
        &self,
        route_call_id: Uuid,
        user_id: Uuid,
        file: UploadedFile,
    ) -> Result<Photo, AppError> {
        let extension = file.validate()?;

        let route_call = RouteCallRepository::new(self.db)
            .find_by_id(route_call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;
        if route_call.organizer_id != user_id {
            return Err(AppError::Forbidden(
                "Only the organizer can update the cover photo".to_string(),
            ));
        }

        let path = object_path(folder_for(PhotoContext::RouteCallCover), extension);
        let image_url = self
            .storage
            .upload(&path, file.bytes, &file.content_type)
            .await?;

        let repo = PhotoRepository::new(self.db);
        match repo.find_active_cover(route_call_id).await? {
            Some(existing) => {
                self.remove_file(&existing.image_url).await;
                Ok(repo.update_image(existing.id, image_url).await?)
            }
            None => Ok(repo
                .create(CreatePhotoParams {
                    context: PhotoContext::RouteCallCover,
                    route_id: None,
                    route_call_id: Some(route_call_id),
                    user_id,
                    image_url,
                    caption: None,
                })
                .await?),
        }
    }

    /// Gets a page of photos, newest first.
    pub async fn list(
        &self,
        filter: PhotoFilter,
        request: PageRequest,
    ) -> Result<Page<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db)
            .get_paginated(filter, request)
            .await?)
    }

    /// Gets the public gallery of a catalog route.
    ///
    /// # Returns
    /// - `Ok(RouteGallery)` - Route with its ACTIVE gallery photos
    /// - `Err(AppError::NotFound)` - No route with this slug
    pub async fn route_gallery(&self, slug: &str) -> Result<RouteGallery, AppError> {
        let route = RouteRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;
        let photos = PhotoRepository::new(self.db)
            .get_active_by_route(route.id, None)
            .await?;

        Ok(RouteGallery { route, photos })
    }

    /// Gets the public gallery of a route call.
    pub async fn route_call_gallery(&self, route_call_id: Uuid) -> Result<RouteCallGallery, AppError> {
        let route_call = RouteCallRepository::new(self.db)
            .find_by_id(route_call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route call not found".to_string()))?;
        let photos = PhotoRepository::new(self.db)
            .get_active_by_route_call(route_call.id, PhotoContext::RouteCallGallery)
            .await?;

        Ok(RouteCallGallery {
            route_call_id: route_call.id,
            title: route_call.title,
            photos,
        })
    }

    /// Gets the user's photos in every status but DELETED.
    pub async fn my_photos(&self, user_id: Uuid) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Gets ACTIVE photos not yet moderated, oldest first.
    pub async fn pending_review(&self) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db).get_pending_review().await?)
    }

    /// Marks a photo as reviewed without changing its status.
    pub async fn approve(&self, photo_id: Uuid, admin: &User) -> Result<Photo, AppError> {
        let repo = PhotoRepository::new(self.db);
        if repo.find_by_id(photo_id).await?.is_none() {
            return Err(AppError::NotFound("Photo not found".to_string()));
        }

        Ok(repo.moderate(photo_id, admin.id, None, None).await?)
    }

    /// Rejects a photo, hiding it from public galleries.
    ///
    /// # Returns
    /// - `Ok(Photo)` - REJECTED photo with moderation fields set
    /// - `Err(AppError::NotFound)` - Photo does not exist
    /// - `Err(AppError::BadRequest)` - Photo was deleted
    pub async fn reject(
        &self,
        photo_id: Uuid,
        admin: &User,
        notes: Option<String>,
    ) -> Result<Photo, AppError> {
        let repo = PhotoRepository::new(self.db);
        let photo = repo
            .find_by_id(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;
        if photo.status == PhotoStatus::Deleted {
            return Err(AppError::BadRequest("Photo is already deleted".to_string()));
        }

        let notes = notes.filter(|n| !n.trim().is_empty());
        Ok(repo
            .moderate(photo_id, admin.id, Some(PhotoStatus::Rejected), notes)
            .await?)
    }

    /// Soft-deletes a photo and removes its file from storage.
    ///
    /// # Returns
    /// - `Ok(())` - Photo marked DELETED
    /// - `Err(AppError::NotFound)` - Photo does not exist
    /// - `Err(AppError::Forbidden)` - User is neither the owner nor an admin
    pub async fn delete(&self, photo_id: Uuid, user: &User) -> Result<(), AppError> {
        let repo = PhotoRepository::new(self.db);
        let photo = repo
            .find_by_id(photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;
        if photo.user_id != user.id && !user.is_admin() {
            return Err(AppError::Forbidden(
                "You can only delete your own photos".to_string(),
            ));
        }

        self.remove_file(&photo.image_url).await;
        repo.set_status(photo_id, PhotoStatus::Deleted).await?;

        Ok(())
    }

    async fn remove_file(&self, image_url: &str) {
        if let Err(e) = self.storage.delete(image_url).await {
            tracing::warn!("Failed to delete photo file {}: {}", image_url, e);
        }
    }
}
