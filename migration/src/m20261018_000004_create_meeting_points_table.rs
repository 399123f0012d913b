use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000003_create_route_calls_table::RouteCall;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MeetingPoint::Table)
                    .if_not_exists()
                    .col(pk_uuid(MeetingPoint::Id))
                    .col(uuid(MeetingPoint::RouteCallId))
                    .col(string(MeetingPoint::Type))
                    .col(string(MeetingPoint::Name))
                    .col(string_null(MeetingPoint::CustomName))
                    .col(string_null(MeetingPoint::Location))
                    .col(timestamp_with_time_zone_null(MeetingPoint::Time))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_point_route_call_id")
                            .from(MeetingPoint::Table, MeetingPoint::RouteCallId)
                            .to(RouteCall::Table, RouteCall::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeetingPoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeetingPoint {
    #[sea_orm(iden = "meeting_points")]
    Table,
    Id,
    RouteCallId,
    Type,
    Name,
    CustomName,
    Location,
    Time,
}
