use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000001_create_users_table::User, m20261018_000002_create_routes_table::Route,
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
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_uuid(Photo::Id))
                    .col(string(Photo::Context))
                    .col(uuid_null(Photo::RouteId))
                    .col(uuid_null(Photo::RouteCallId))
                    .col(uuid(Photo::UserId))
                    .col(string(Photo::ImageUrl))
                    .col(text_null(Photo::Caption))
                    .col(string(Photo::Status).default("ACTIVE"))
                    .col(uuid_null(Photo::ModeratedBy))
                    .col(timestamp_with_time_zone_null(Photo::ModeratedAt))
                    .col(text_null(Photo::ModerationNotes))
                    .col(
                        timestamp_with_time_zone(Photo::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Photo::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_route_id")
                            .from(Photo::Table, Photo::RouteId)
                            .to(Route::Table, Route::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_route_call_id")
                            .from(Photo::Table, Photo::RouteCallId)
                            .to(RouteCall::Table, RouteCall::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_user_id")
                            .from(Photo::Table, Photo::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_moderated_by")
                            .from(Photo::Table, Photo::ModeratedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photo_context_status")
                    .table(Photo::Table)
                    .col(Photo::Context)
                    .col(Photo::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photo {
    #[sea_orm(iden = "photos")]
    Table,
    Id,
    Context,
    RouteId,
    RouteCallId,
    UserId,
    ImageUrl,
    Caption,
    Status,
    ModeratedBy,
    ModeratedAt,
    ModerationNotes,
    CreatedAt,
    UpdatedAt,
}
