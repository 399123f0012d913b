use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_users_table::User,
    m20261018_000003_create_route_calls_table::RouteCall,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_uuid(Attendance::Id))
                    .col(uuid(Attendance::RouteCallId))
                    .col(uuid(Attendance::UserId))
                    .col(string(Attendance::Status).default("CONFIRMED"))
                    .col(
                        timestamp_with_time_zone(Attendance::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Attendance::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_route_call_id")
                            .from(Attendance::Table, Attendance::RouteCallId)
                            .to(RouteCall::Table, RouteCall::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_user_id")
                            .from(Attendance::Table, Attendance::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One attendance row per user and route call; cancelling flips the status
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_route_call_user_unique")
                    .table(Attendance::Table)
                    .col(Attendance::RouteCallId)
                    .col(Attendance::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    #[sea_orm(iden = "attendances")]
    Table,
    Id,
    RouteCallId,
    UserId,
    Status,
    CreatedAt,
    UpdatedAt,
}
