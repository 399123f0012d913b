//! Uploaded image attached to a route gallery or to a route call.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{PhotoContext, PhotoStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub context: PhotoContext,
    pub route_id: Option<Uuid>,
    pub route_call_id: Option<Uuid>,
    pub user_id: Uuid,
    pub image_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub status: PhotoStatus,
    pub moderated_by: Option<Uuid>,
    pub moderated_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub moderation_notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id",
        on_delete = "Cascade"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::route_call::Entity",
        from = "Column::RouteCallId",
        to = "super::route_call::Column::Id",
        on_delete = "Cascade"
    )]
    RouteCall,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Uploader,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ModeratedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Moderator,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::route_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteCall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
