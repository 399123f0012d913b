use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261018_000001_create_users_table::User, m20261018_000002_create_routes_table::Route};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RouteCall::Table)
                    .if_not_exists()
                    .col(pk_uuid(RouteCall::Id))
                    .col(uuid_null(RouteCall::RouteId))
                    .col(uuid(RouteCall::OrganizerId))
                    .col(string(RouteCall::Title))
                    .col(text_null(RouteCall::Description))
                    .col(string(RouteCall::Image))
                    .col(timestamp_with_time_zone(RouteCall::DateRoute))
                    .col(string(RouteCall::Pace))
                    .col(string(RouteCall::Status).default("SCHEDULED"))
                    .col(
                        timestamp_with_time_zone(RouteCall::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(RouteCall::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_call_route_id")
                            .from(RouteCall::Table, RouteCall::RouteId)
                            .to(Route::Table, Route::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_call_organizer_id")
                            .from(RouteCall::Table, RouteCall::OrganizerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_call_date_route")
                    .table(RouteCall::Table)
                    .col(RouteCall::DateRoute)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_call_status")
                    .table(RouteCall::Table)
                    .col(RouteCall::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RouteCall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RouteCall {
    #[sea_orm(iden = "route_calls")]
    Table,
    Id,
    RouteId,
    OrganizerId,
    Title,
    Description,
    Image,
    DateRoute,
    Pace,
    Status,
    CreatedAt,
    UpdatedAt,
}
