//! Predefined skating route from the club catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::RouteLevel;

/// Difficulty levels of a route, persisted as a JSON array of level names.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RouteLevels(pub Vec<RouteLevel>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub image: String,
    pub approximate_distance: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub map_embed_url: Option<String>,
    pub gpx_file_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub level: RouteLevels,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::route_call::Entity")]
    RouteCall,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::route_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteCall.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
