use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::MeetingPointType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meeting_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub route_call_id: Uuid,
    #[sea_orm(column_name = "type")]
    pub point_type: MeetingPointType,
    pub name: String,
    /// Free text used when the predefined name is "Otro".
    pub custom_name: Option<String>,
    pub location: Option<String>,
    pub time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route_call::Entity",
        from = "Column::RouteCallId",
        to = "super::route_call::Column::Id",
        on_delete = "Cascade"
    )]
    RouteCall,
}

impl Related<super::route_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteCall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
