//! Photo gallery repository.
//!
//! Photos reference two users (uploader and moderator), so authors are attached with a batched
//! user lookup instead of `find_also_related`.

use chrono::Utc;
use entity::sea_orm_active_enums::{PhotoContext, PhotoStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::{
    data::{require_related, user::UserRepository},
    model::{
        page::{Page, PageRequest},
        photo::{CreatePhotoParams, Photo, PhotoFilter},
    },
};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an uploaded photo as ACTIVE.
    pub async fn create(&self, params: CreatePhotoParams) -> Result<Photo, DbErr> {
        let now = Utc::now();
        let photo = entity::photo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            context: ActiveValue::Set(params.context),
            route_id: ActiveValue::Set(params.route_id),
            route_call_id: ActiveValue::Set(params.route_call_id),
            user_id: ActiveValue::Set(params.user_id),
            image_url: ActiveValue::Set(params.image_url),
            caption: ActiveValue::Set(params.caption),
            status: ActiveValue::Set(PhotoStatus::Active),
            moderated_by: ActiveValue::Set(None),
            moderated_at: ActiveValue::Set(None),
            moderation_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.single(photo).await
    }

    /// Gets the bare photo row, for existence and ownership checks.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::photo::Model>, DbErr> {
        entity::prelude::Photo::find_by_id(id).one(self.db).await
    }

    /// Gets one page of photos matching `filter`, newest first.
    pub async fn get_paginated(
        &self,
        filter: PhotoFilter,
        request: PageRequest,
    ) -> Result<Page<Photo>, DbErr> {
        use entity::photo::Column;

        let mut query = entity::prelude::Photo::find().filter(Column::Status.eq(filter.status));
        if let Some(context) = filter.context {
            query = query.filter(Column::Context.eq(context));
        }
        if let Some(route_id) = filter.route_id {
            query = query.filter(Column::RouteId.eq(route_id));
        }
        if let Some(route_call_id) = filter.route_call_id {
            query = query.filter(Column::RouteCallId.eq(route_call_id));
        }

        let paginator = query
            .order_by_desc(Column::CreatedAt)
            .paginate(self.db, request.limit);
        let totals = paginator.num_items_and_pages().await?;
        let models = paginator.fetch_page(request.index()).await?;

        Ok(Page {
            items: self.with_users(models, false).await?,
            request,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    /// Gets ACTIVE route gallery photos of a route, newest first.
    ///
    /// # Arguments
    /// - `route_id` - Route owning the gallery
    /// - `limit` - Maximum number of photos, `None` for all
    pub async fn get_active_by_route(
        &self,
        route_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<Photo>, DbErr> {
        let models = entity::prelude::Photo::find()
            .filter(entity::photo::Column::RouteId.eq(route_id))
            .filter(entity::photo::Column::Context.eq(PhotoContext::RouteGallery))
            .filter(entity::photo::Column::Status.eq(PhotoStatus::Active))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_users(models, false).await
    }

    /// Gets ACTIVE photos of a route call in the given context, newest first.
    pub async fn get_active_by_route_call(
        &self,
        route_call_id: Uuid,
        context: PhotoContext,
    ) -> Result<Vec<Photo>, DbErr> {
        let models = entity::prelude::Photo::find()
            .filter(entity::photo::Column::RouteCallId.eq(route_call_id))
            .filter(entity::photo::Column::Context.eq(context))
            .filter(entity::photo::Column::Status.eq(PhotoStatus::Active))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_users(models, false).await
    }

    /// Gets the current ACTIVE cover photo of a route call, if any.
    pub async fn find_active_cover(
        &self,
        route_call_id: Uuid,
    ) -> Result<Option<entity::photo::Model>, DbErr> {
        entity::prelude::Photo::find()
            .filter(entity::photo::Column::RouteCallId.eq(route_call_id))
            .filter(entity::photo::Column::Context.eq(PhotoContext::RouteCallCover))
            .filter(entity::photo::Column::Status.eq(PhotoStatus::Active))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .one(self.db)
            .await
    }

    /// Gets a user's photos except soft-deleted ones, newest first, with moderators.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Photo>, DbErr> {
        let models = entity::prelude::Photo::find()
            .filter(entity::photo::Column::UserId.eq(user_id))
            .filter(entity::photo::Column::Status.ne(PhotoStatus::Deleted))
            .order_by_desc(entity::photo::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_users(models, true).await
    }

    /// Gets ACTIVE photos no admin has looked at yet, oldest first.
    pub async fn get_pending_review(&self) -> Result<Vec<Photo>, DbErr> {
        let models = entity::prelude::Photo::find()
            .filter(entity::photo::Column::Status.eq(PhotoStatus::Active))
            .filter(entity::photo::Column::ModeratedAt.is_null())
            .order_by_asc(entity::photo::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_users(models, false).await
    }

    /// Points an existing photo at a new image.
    pub async fn update_image(&self, id: Uuid, image_url: String) -> Result<Photo, DbErr> {
        let photo = entity::photo::ActiveModel {
            id: ActiveValue::Unchanged(id),
            image_url: ActiveValue::Set(image_url),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.single(photo).await
    }

    /// Stamps the moderation fields, optionally changing the status.
    ///
    /// # Arguments
    /// - `id` - Photo to moderate
    /// - `moderator_id` - Admin performing the moderation
    /// - `status` - New status, `None` to keep the current one (approval)
    /// - `notes` - Moderation notes, stored as given
    pub async fn moderate(
        &self,
        id: Uuid,
        moderator_id: Uuid,
        status: Option<PhotoStatus>,
        notes: Option<String>,
    ) -> Result<Photo, DbErr> {
        let now = Utc::now();
        let mut active = entity::photo::ActiveModel {
            id: ActiveValue::Unchanged(id),
            moderated_by: ActiveValue::Set(Some(moderator_id)),
            moderated_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        if let Some(status) = status {
            active.status = ActiveValue::Set(status);
            active.moderation_notes = ActiveValue::Set(notes);
        }
        let photo = active.update(self.db).await?;

        self.single(photo).await
    }

    pub async fn set_status(&self, id: Uuid, status: PhotoStatus) -> Result<Photo, DbErr> {
        let photo = entity::photo::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        self.single(photo).await
    }

    async fn single(&self, model: entity::photo::Model) -> Result<Photo, DbErr> {
        let id = model.id;
        self.with_users(vec![model], false)
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Photo {} not found", id)))
    }

    /// Attaches uploaders and, when requested, moderators. Preserves order.
    async fn with_users(
        &self,
        models: Vec<entity::photo::Model>,
        include_moderator: bool,
    ) -> Result<Vec<Photo>, DbErr> {
        let ids = models.iter().flat_map(|m| {
            std::iter::once(m.user_id).chain(m.moderated_by.filter(|_| include_moderator))
        });
        let users = UserRepository::new(self.db).find_by_ids(ids).await?;

        models
            .into_iter()
            .map(|model| {
                let user = require_related(users.get(&model.user_id).cloned(), "Uploader", model.id)?;
                let moderator = model
                    .moderated_by
                    .filter(|_| include_moderator)
                    .and_then(|id| users.get(&id).cloned());
                Ok(Photo::from_entity(model, user, moderator))
            })
            .collect()
    }
}
